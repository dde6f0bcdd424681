use anyhow::{Result, bail};
use inkwell_application::{FeedPage, MyBlogsPage, Page};
use inkwell_core::deletion::DeleteOutcome;
use inkwell_core::editor::SaveOutcome;
use inkwell_core::route::{FEED_PATH, MY_BLOGS_PATH};

use super::context::Context;
use super::render::{print_notice, print_page, print_record};
use super::utils::{confirm, parse_category};

const NOT_SIGNED_IN: &str = "Not signed in. Run `inkwell login` first.";

async fn feed_page(ctx: &mut Context) -> Result<FeedPage> {
    match ctx.app.navigate(FEED_PATH).await {
        Page::Feed(page) => Ok(page),
        _ => bail!(NOT_SIGNED_IN),
    }
}

async fn my_blogs_page(ctx: &mut Context) -> Result<MyBlogsPage> {
    match ctx.app.navigate(MY_BLOGS_PATH).await {
        Page::MyBlogs(page) => Ok(page),
        _ => bail!(NOT_SIGNED_IN),
    }
}

/// Loads the user's posts, failing when the listing could not be fetched.
async fn loaded_my_blogs(ctx: &mut Context) -> Result<MyBlogsPage> {
    let page = my_blogs_page(ctx).await?;
    if let Some(notice) = page.controller().last_error().await {
        print_notice(notice);
        bail!("Could not load your posts");
    }
    Ok(page)
}

pub async fn open(ctx: &mut Context, path: &str) -> Result<()> {
    let page = ctx.app.navigate(path).await;
    if page.route().path() != path {
        println!("-> {}", page.route());
    }
    print_page(&page).await;
    Ok(())
}

pub async fn feed(ctx: &mut Context, category: Option<&str>, author: Option<String>) -> Result<()> {
    let category = parse_category(category)?;
    let mut page = feed_page(ctx).await?;
    if category.is_some() || author.is_some() {
        page.set_draft_category(category);
        page.set_draft_author(author);
        page.apply_draft_filter().await;
    }
    print_page(&Page::Feed(page)).await;
    Ok(())
}

pub async fn mine(ctx: &mut Context, category: Option<&str>) -> Result<()> {
    let category = parse_category(category)?;
    let mut page = my_blogs_page(ctx).await?;
    if category.is_some() {
        page.set_draft_category(category);
        page.apply_draft_filter().await;
    }
    print_page(&Page::MyBlogs(page)).await;
    Ok(())
}

pub async fn create(
    ctx: &mut Context,
    title: String,
    category: Option<&str>,
    content: String,
) -> Result<()> {
    let category = parse_category(category)?;
    let mut page = my_blogs_page(ctx).await?;

    page.open_create();
    page.editor.set_title(title);
    page.editor.set_category(category);
    page.editor.set_content(content);
    report_save(&mut page).await
}

pub async fn edit(
    ctx: &mut Context,
    id: &str,
    title: Option<String>,
    category: Option<&str>,
    content: Option<String>,
) -> Result<()> {
    let category = category.map(|raw| parse_category(Some(raw))).transpose()?;
    let mut page = loaded_my_blogs(ctx).await?;

    if page.open_edit(id).await.is_none() {
        bail!("No post with id {} among your posts", id);
    }
    if let Some(title) = title {
        page.editor.set_title(title);
    }
    if let Some(category) = category {
        page.editor.set_category(category);
    }
    if let Some(content) = content {
        page.editor.set_content(content);
    }
    report_save(&mut page).await
}

async fn report_save(page: &mut MyBlogsPage) -> Result<()> {
    match page.save().await {
        SaveOutcome::Created(record) => {
            println!("Created:");
            print_record(&record);
        }
        SaveOutcome::Updated(record) => {
            println!("Updated:");
            print_record(&record);
        }
        SaveOutcome::Failed => {
            if let Some(notice) = page.editor.notice() {
                print_notice(notice);
            }
            bail!("Save failed");
        }
        SaveOutcome::NothingToSave => {}
    }
    Ok(())
}

pub async fn delete(ctx: &mut Context, id: &str, yes: bool) -> Result<()> {
    let mut page = loaded_my_blogs(ctx).await?;
    if page.request_delete(id).await.is_none() {
        bail!("No post with id {} among your posts", id);
    }

    let prompt = page.deleter.prompt().unwrap_or_default();
    if !yes && !confirm(&prompt)? {
        page.cancel_delete();
        println!("Cancelled");
        return Ok(());
    }

    match page.confirm_delete().await {
        DeleteOutcome::Deleted(id) => {
            println!("Deleted {}", id);
            Ok(())
        }
        DeleteOutcome::Failed => {
            if let Some(notice) = page.deleter.take_alert() {
                print_notice(notice);
            }
            bail!("Delete failed")
        }
        DeleteOutcome::NothingToDelete => Ok(()),
    }
}
