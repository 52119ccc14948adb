use anyhow::Result;

use vitrine_core::content::LoadState;
use vitrine_core::AppConfig;
use vitrine_view::{Page, PageKind};

pub async fn run(config: &AppConfig) -> Result<()> {
    let mut page = Page::from_config(PageKind::Blog, config)?;
    page.mount().await;

    if page.content().state() == LoadState::Failed {
        println!("Could not reach {} (showing empty counts)\n", config.source.base_url);
    }

    println!("Categories:\n");
    for category in page.content().category_counts() {
        println!("  {} {} ({})", category.icon, category.name, category.count);
    }

    Ok(())
}
