//! Interactive prompt browser
//!
//! Renders from the store snapshot after every action. Each action goes
//! through its own runner, and a failure is shown once and dismissed;
//! nothing is retried unless the user picks the action again.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Input, Select};

use promptdeck::{
    AddPrompt, ApiError, Field, FetchPrompts, NewPrompt, OperationKind, OperationRunner,
    PromptClient, PromptInState, PromptStore, PromptUpdate, RemoteOperation, RemovePrompt,
    RunCallbacks, UpdatePrompt,
};

use crate::ask_field;
use crate::render;

const ADD: &str = "+ Add prompt";
const REFRESH: &str = "↻ Refresh";
const QUIT: &str = "✕ Quit";

struct Session {
    store: PromptStore,
    fetch: OperationRunner<FetchPrompts>,
    add: OperationRunner<AddPrompt>,
    update: OperationRunner<UpdatePrompt>,
    remove: OperationRunner<RemovePrompt>,
}

enum ItemAction {
    ToggleExpand,
    Update,
    Remove,
    Back,
}

pub async fn run(client: PromptClient) -> Result<()> {
    let session = Session {
        store: client.store().clone(),
        fetch: OperationRunner::new(client.clone(), FetchPrompts),
        add: OperationRunner::new(client.clone(), AddPrompt),
        update: OperationRunner::new(client.clone(), UpdatePrompt),
        remove: OperationRunner::new(client, RemovePrompt),
    };

    session.refresh().await?;

    loop {
        let data = session.store.snapshot().data;
        let mut labels: Vec<String> = data.iter().map(render::item_label).collect();
        labels.extend([ADD, REFRESH, QUIT].map(String::from));

        let choice = Select::new()
            .with_prompt("Prompts")
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read selection")?;

        match choice {
            i if i < data.len() => session.item_menu(data[i].id()).await?,
            i if i == data.len() => session.add_prompt().await?,
            i if i == data.len() + 1 => session.refresh().await?,
            _ => break,
        }
    }

    Ok(())
}

impl Session {
    async fn refresh(&self) -> Result<()> {
        eprintln!("{}", "Loading prompts...".dimmed());
        if let Err(e) = self.fetch.run((), RunCallbacks::new()).await {
            dismiss_failure(self.fetch.operation().kind(), &e)?;
        }
        Ok(())
    }

    async fn add_prompt(&self) -> Result<()> {
        let input = NewPrompt::new(
            ask_field(Field::Title, "New prompt")?,
            ask_field(Field::Prompt, "Do this, do that!")?,
        );
        if let Err(e) = input.validate() {
            println!("{}", e.to_string().yellow());
            return Ok(());
        }

        let callbacks = RunCallbacks::new().on_success(|| println!("{} Prompt added", "✓".green()));
        if let Err(e) = self.add.run(input, callbacks).await {
            dismiss_failure(self.add.operation().kind(), &e)?;
        }
        Ok(())
    }

    async fn item_menu(&self, id: &str) -> Result<()> {
        loop {
            let Some(item) = self.store.snapshot().find(id).cloned() else {
                return Ok(());
            };

            println!("{}", render::render_item(&item));

            let toggle = if item.expanded { "Collapse" } else { "Expand" };
            let actions = [toggle, "Update prompt", "Remove prompt", "Back"];
            let choice = Select::new()
                .items(&actions)
                .default(0)
                .interact()
                .context("Failed to read selection")?;

            let action = match choice {
                0 => ItemAction::ToggleExpand,
                1 => ItemAction::Update,
                2 => ItemAction::Remove,
                _ => ItemAction::Back,
            };

            match action {
                ItemAction::ToggleExpand => {
                    self.store.toggle_expanded(id);
                }
                ItemAction::Update => self.update_prompt(&item).await?,
                ItemAction::Remove => {
                    self.remove_prompt(&item).await?;
                    return Ok(());
                }
                ItemAction::Back => return Ok(()),
            }
        }
    }

    async fn update_prompt(&self, item: &PromptInState) -> Result<()> {
        let original = &item.prompt;
        let update = PromptUpdate::for_prompt(
            original,
            ask_field(Field::Title, &original.title)?,
            ask_field(Field::Prompt, &original.body)?,
        );
        if let Err(e) = update.validate_against(original) {
            println!("{}", e.to_string().yellow());
            return Ok(());
        }

        let callbacks =
            RunCallbacks::new().on_success(|| println!("{} Prompt updated", "✓".green()));
        if let Err(e) = self.update.run(update, callbacks).await {
            dismiss_failure(self.update.operation().kind(), &e)?;
        }
        Ok(())
    }

    async fn remove_prompt(&self, item: &PromptInState) -> Result<()> {
        let callbacks =
            RunCallbacks::new().on_success(|| println!("{} Prompt removed", "✓".green()));
        if let Err(e) = self.remove.run(item.prompt.clone(), callbacks).await {
            dismiss_failure(self.remove.operation().kind(), &e)?;
        }
        Ok(())
    }
}

/// Show a failed action until the user dismisses it
fn dismiss_failure(kind: OperationKind, error: &ApiError) -> Result<()> {
    eprintln!("{}", render::render_failure(kind, error));

    Input::<String>::new()
        .with_prompt("Press Enter to dismiss")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")?;

    Ok(())
}
