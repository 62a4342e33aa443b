use clap::Subcommand;
use startpage_core::{Dashboard, Priority};

use super::{declined, print_json};

#[derive(Subcommand)]
pub enum TodoAction {
    /// List todos in order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Append a todo
    Add {
        text: String,
        /// normal or urgent
        #[arg(long, default_value = "normal")]
        priority: Priority,
    },
    /// Mark a todo done
    Done { index: usize },
    /// Mark a todo not done
    Undone { index: usize },
    /// Replace a todo's text and priority
    Edit {
        index: usize,
        text: String,
        #[arg(long, default_value = "normal")]
        priority: Priority,
    },
    /// Delete a todo
    Remove { index: usize },
    /// Move a todo to a new position
    Move { from: usize, to: usize },
}

pub fn run(action: TodoAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut dash = Dashboard::open()?;
    let todos = &mut dash.todos;

    let applied = match action {
        TodoAction::List { json } => {
            if json {
                return print_json(todos.items());
            }
            for (i, item) in todos.items().iter().enumerate() {
                let check = if item.completed { "x" } else { " " };
                let flag = if item.priority == Priority::Urgent { " !" } else { "" };
                println!("{i:>3} [{check}] {}{flag}", item.text);
            }
            return Ok(());
        }
        TodoAction::Add { text, priority } => todos.add(&text, priority)?,
        TodoAction::Done { index } => todos.set_completed(index, true)?,
        TodoAction::Undone { index } => todos.set_completed(index, false)?,
        TodoAction::Edit {
            index,
            text,
            priority,
        } => todos.edit(index, &text, priority)?,
        TodoAction::Remove { index } => todos.remove(index)?,
        TodoAction::Move { from, to } => todos.move_item(from, to)?,
    };

    if !applied {
        return declined("todo");
    }
    print_json(todos.items())
}
