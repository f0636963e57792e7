use anyhow::Result;
use clap::Parser;
use showroom_tui::app;
use showroom_tui::catalog::{Catalog, Category};
use showroom_tui::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "showroom",
    about = "A terminal showroom for the KYMCO motorcycle lineup",
    version
)]
struct Args {
    /// Path to a catalog JSON file (defaults to the embedded factory data)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Validate the catalog, print a summary, and exit (no TUI)
    #[arg(long)]
    check: bool,

    /// Store an advisor API key in the config file and exit
    #[arg(long, value_name = "KEY")]
    set_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(key) = args.set_key {
        let mut config = Config::load();
        config.advisor_api_key = Some(key);
        config.save()?;
        println!("已保存顾问服务密钥");
        return Ok(());
    }

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::embedded()?,
    };

    if args.check {
        print_summary(&catalog);
        return Ok(());
    }

    app::run_tui(catalog).await
}

fn print_summary(catalog: &Catalog) {
    println!("车型库校验通过 · 共 {} 款车型", catalog.len());
    for category in Category::ALL {
        let count = catalog
            .records()
            .iter()
            .filter(|r| r.category == category)
            .count();
        if count > 0 {
            println!("  {}: {} 款", category, count);
        }
    }
}
