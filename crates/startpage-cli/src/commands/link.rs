use clap::Subcommand;
use startpage_core::Dashboard;

use super::{declined, print_json};

#[derive(Subcommand)]
pub enum LinkAction {
    /// List quick links
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a link
    Add { name: String, url: String },
    /// Replace a link's name and URL
    Edit {
        index: usize,
        name: String,
        url: String,
    },
    /// Delete a link
    Remove { index: usize },
    /// Move a link to a new position
    Move { from: usize, to: usize },
}

pub fn run(action: LinkAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut dash = Dashboard::open()?;
    let links = &mut dash.links;

    let applied = match action {
        LinkAction::List { json } => {
            if json {
                return print_json(links.items());
            }
            for (i, link) in links.items().iter().enumerate() {
                println!("{i:>3} {}  {}", link.name, link.url);
            }
            return Ok(());
        }
        LinkAction::Add { name, url } => links.add(&name, &url)?,
        LinkAction::Edit { index, name, url } => links.edit(index, &name, &url)?,
        LinkAction::Remove { index } => links.remove(index)?,
        LinkAction::Move { from, to } => links.move_item(from, to)?,
    };

    if !applied {
        return declined("link");
    }
    print_json(links.items())
}
