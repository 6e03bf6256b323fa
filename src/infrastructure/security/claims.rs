// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::{
    collections::HashSet,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Rebuild the authenticated user from the facts of a verified token.
/// Effective capabilities are the role defaults plus explicit `right` facts.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = Self::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
        let username = self
            .username
            .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
        let role = self
            .role
            .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

        let id = UserId::new(user_id)
            .map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

        let mut capabilities = role.default_capabilities();
        capabilities.extend(self.capabilities);

        Ok(AuthenticatedUser {
            id,
            username,
            role,
            capabilities,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => {
                self.role = role.parse().ok();
            }
            ("issued_at", [Term::Date(secs)]) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*secs));
            }
            ("expires_at", [Term::Date(secs)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*secs));
            }
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(action.clone(), resource.clone()));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(name: &str, terms: Vec<Term>) -> Fact {
        Fact::new(name.to_string(), terms)
    }

    fn base_facts(role: &str) -> Vec<Fact> {
        vec![
            fact("user", vec![Term::Integer(9), Term::Str("robin".into())]),
            fact("role", vec![Term::Str(role.into())]),
            fact("issued_at", vec![Term::Date(1_700_000_000)]),
            fact("expires_at", vec![Term::Date(1_700_003_600)]),
        ]
    }

    #[test]
    fn role_defaults_merge_with_explicit_rights() {
        let mut facts = base_facts("author");
        facts.push(fact(
            "right",
            vec![Term::Str("blog-category".into()), Term::Str("view".into())],
        ));
        let user = parse_claims(facts).unwrap();
        assert_eq!(user.role, Role::Author);
        assert_eq!(user.username, "robin");
        assert!(user.has_capability(&Capability::view_blog_category()));
        assert_eq!(user.expires_at.timestamp(), 1_700_003_600);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = parse_claims(base_facts("owner")).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn missing_user_fact_is_rejected() {
        let facts = base_facts("editor").into_iter().skip(1).collect();
        assert!(parse_claims(facts).is_err());
    }
}
