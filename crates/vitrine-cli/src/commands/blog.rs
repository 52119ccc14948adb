use anyhow::Result;

use vitrine_core::content::{byline, ContentItem, MediaResolver};
use vitrine_core::AppConfig;
use vitrine_view::{Page, PageKind};

pub async fn run(config: &AppConfig, category: &str) -> Result<()> {
    let mut page = Page::from_config(PageKind::Blog, config)?;

    if page.mount().await.is_empty() {
        println!("No posts yet.");
        return Ok(());
    }

    let content = page.content();

    if let Some(featured) = content.featured().first() {
        println!("Featured:\n");
        print_item(featured, page.media());
    }

    page.content_mut().set_category(category);
    let content = page.content();
    let posts = content.filtered_view();

    println!("{} ({}):\n", content.selected_category(), posts.len());
    for item in posts {
        print_item(item, page.media());
    }

    Ok(())
}

fn print_item(item: &ContentItem, media: &MediaResolver) {
    println!("  [{}] {}", item.display_category(), item.display_title());
    println!("    {}", item.display_excerpt());
    println!("    {} - {}", item.display_author(), byline(item));
    println!("    Image:  {}", media.resolve_image(item.image.as_ref()));
    println!("    Avatar: {}", media.resolve_avatar(item.author_image.as_ref()));
    println!();
}
