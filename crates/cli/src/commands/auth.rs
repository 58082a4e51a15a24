// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session commands.

use crate::app::App;
use crate::cli::OutputFormat;
use crate::display::format_user;
use crate::error::{Error, Result};
use crate::sync::{Backend, Registration};

use super::emit;

pub async fn login<B: Backend + 'static>(app: &App<B>, email: &str, password: &str) -> Result<()> {
    let user = app.repository().login(email, password).await?;
    println!("Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub async fn register<B: Backend + 'static>(app: &App<B>, registration: Registration) -> Result<()> {
    let user = app.repository().register(&registration).await?;
    println!("Registered {} <{}>", user.name, user.email);
    Ok(())
}

pub fn logout<B: Backend + 'static>(app: &App<B>) -> Result<()> {
    app.repository().logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami<B: Backend + 'static>(app: &App<B>, output: OutputFormat) -> Result<()> {
    let user = app.repository().current_user().ok_or(Error::NotAuthenticated)?;
    emit(output, &user, [format_user(&user)])
}
