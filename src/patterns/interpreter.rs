//! Interpreter: a user's profile page may contain `{{myCD.<method>}}`
//! placeholders that are resolved against the user's favourite CD.
//!
//! Only methods listed in `CdMethod` can be called from a profile.

use super::TITLE;
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Context, Result, bail};
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\{\{myCD\.(.*?)\}\}"));

fn placeholder() -> Result<&'static Regex> {
    PLACEHOLDER
        .as_ref()
        .map_err(Clone::clone)
        .context("Invalid profile placeholder pattern")
}

#[derive(Debug, Clone)]
pub struct User {
    username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        User {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn profile_page(&self) -> String {
        let mut profile = String::from("<h2>I like Never Again</h2>");
        profile.push_str("I love all of their songs. My favourite CD: <br />");
        profile.push_str("{{myCD.getTitle}}");
        profile
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CdMethod {
    GetTitle,
}

impl TryFrom<&str> for CdMethod {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "getTitle" => Ok(CdMethod::GetTitle),
            other => bail!("Unknown CD method in profile: {other}"),
        }
    }
}

pub struct UserCd<'a> {
    user: &'a User,
}

impl<'a> UserCd<'a> {
    pub fn new(user: &'a User) -> Self {
        UserCd { user }
    }

    pub fn user(&self) -> &User {
        self.user
    }

    pub fn call(&self, method: CdMethod) -> String {
        match method {
            CdMethod::GetTitle => TITLE.to_string(),
        }
    }
}

pub struct UserCdInterpreter<'a> {
    user: &'a User,
}

impl<'a> UserCdInterpreter<'a> {
    pub fn new(user: &'a User) -> Self {
        UserCdInterpreter { user }
    }

    /// Replace every placeholder; an unknown method fails the whole page.
    pub fn interpreted(&self) -> Result<String> {
        let mut profile = self.user.profile_page();

        let mut methods: Vec<String> = Vec::new();
        for capture in placeholder()?.captures_iter(&profile) {
            let name = capture[1].to_string();
            if !methods.contains(&name) {
                methods.push(name);
            }
        }

        let cd = UserCd::new(self.user);
        for name in methods {
            let method = CdMethod::try_from(name.as_str())?;
            profile = profile.replace(&format!("{{{{myCD.{name}}}}}"), &cd.call(method));
        }
        Ok(profile)
    }
}

fn demonstrate() -> Result<Observed> {
    let user = User::new("aaron");
    let profile = UserCdInterpreter::new(&user).interpreted()?;
    Ok(Observed::Text(profile))
}

pub fn example() -> Example {
    Example::new(
        "interpreter",
        PatternFamily::Behavioral,
        "Expand CD placeholders in a profile page",
        Observed::text(
            "<h2>I like Never Again</h2>I love all of their songs. My favourite CD: <br />Waste of a Rib",
        ),
        demonstrate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_pattern_is_available_as_a_result() {
        let pattern = placeholder().expect("placeholder pattern compiles");
        assert!(pattern.is_match("{{myCD.getTitle}}"));
        assert!(!pattern.is_match("{{yourCD.getTitle}}"));
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(CdMethod::try_from("getPrice").is_err());
    }

    #[test]
    fn placeholder_pattern_is_lazy() {
        let text = "{{myCD.getTitle}} and {{myCD.getBand}}";
        let names: Vec<&str> = placeholder()
            .expect("placeholder pattern compiles")
            .captures_iter(text)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        assert_eq!(names, vec!["getTitle", "getBand"]);
    }

    #[test]
    fn user_cd_resolves_title() {
        let user = User::new("aaron");
        let cd = UserCd::new(&user);
        assert_eq!(cd.user().username(), "aaron");
        assert_eq!(cd.call(CdMethod::GetTitle), "Waste of a Rib");
    }
}
