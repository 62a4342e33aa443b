use clap::Args;
use startpage_core::{search_url, Config};

#[derive(Args)]
pub struct SearchArgs {
    /// Query; prefix with `g:` for Google or `b:` for Baidu
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

pub fn run(args: SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let query = args.query.join(" ");
    match search_url(&query, config.search.default_engine) {
        Some(url) => {
            println!("{url}");
            Ok(())
        }
        None => Err("empty search query".into()),
    }
}
