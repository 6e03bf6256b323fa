//! Issue an access token for local development.
//!
//! `mint_token <user-id> <username> <role> [capability ...]`
use anyhow::{Context, Result, bail};
use blog_admin::{
    application::{dto::TokenSubject, ports::security::TokenManager},
    config::AppConfig,
    domain::user::{Capability, Role, UserId},
    infrastructure::security::token::BiscuitTokenManager,
};
use std::collections::HashSet;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [user_id, username, role, grants @ ..] = args.as_slice() else {
        bail!("usage: mint_token <user-id> <username> <role> [capability ...]");
    };

    let user_id = UserId::new(user_id.parse().context("user id must be an integer")?)?;
    let role: Role = role.parse()?;
    let capabilities = grants
        .iter()
        .map(|raw| raw.parse::<Capability>())
        .collect::<Result<HashSet<_>, _>>()?;

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let token = manager
        .issue(TokenSubject {
            user_id,
            username: username.clone(),
            role,
            capabilities,
        })
        .await?;

    println!("{}", token.token);
    eprintln!("expires at {}", token.expires_at.to_rfc3339());
    Ok(())
}
