use anyhow::{Result, bail};
use inkwell_application::Page;

use super::context::Context;
use super::render::{print_nav, print_notice, print_page};
use super::utils::prompt_password;

pub async fn login(ctx: &mut Context, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password:")?,
    };

    match ctx.app.login(email, &password).await? {
        Page::Auth(page) => {
            if let Some(notice) = page.form.error() {
                print_notice(notice);
            }
            bail!("Login failed");
        }
        page => {
            println!("Signed in as {}", email);
            print_page(&page).await;
        }
    }
    Ok(())
}

pub async fn signup(
    ctx: &mut Context,
    name: &str,
    email: &str,
    password: Option<String>,
    confirm_password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password:")?,
    };
    let confirm_password = match confirm_password {
        Some(confirm) => confirm,
        None => prompt_password("Confirm password:")?,
    };

    let page = ctx
        .app
        .signup(name, email, &password, &confirm_password)
        .await?;
    if let Some(notice) = page.form.success() {
        print_notice(notice);
        return Ok(());
    }
    if let Some(notice) = page.form.error() {
        print_notice(notice);
    }
    bail!("Signup failed")
}

pub async fn logout(ctx: &mut Context) -> Result<()> {
    ctx.app.logout().await?;
    println!("Signed out");
    print_nav(&ctx.app.nav_items());
    Ok(())
}

pub fn status(ctx: &Context) {
    let state = if ctx.app.has_session() {
        "signed in"
    } else {
        "signed out"
    };
    println!("Session:  {}", state);
    println!("Backend:  {}", ctx.config.base_url());
    println!("Config:   {}", ctx.paths.config_file().display());
    println!("Policy:   {:?}", ctx.config.stale_policy);
    print_nav(&ctx.app.nav_items());
}
