use serde::{Deserialize, Serialize};

/// What is known about the environment the ceremony runs in.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BrowserVersion {
    pub browser: Browser,
    pub major: u32,
}

impl Environment {
    pub fn new(user_agent: impl Into<String>) -> Environment {
        Environment {
            user_agent: Some(user_agent.into()),
        }
    }

    /// Browser family and major version from the user agent, if recognized.
    ///
    /// Tokens are checked most specific first: Edge and Chrome user agents
    /// also advertise `Safari/`, Edge also advertises `Chrome/`.
    pub fn browser_version(&self) -> Option<BrowserVersion> {
        let user_agent = self.user_agent.as_deref()?;

        [
            (Browser::Edge, "Edg/"),
            (Browser::Firefox, "Firefox/"),
            (Browser::Chrome, "Chrome/"),
        ]
        .into_iter()
        .find_map(|(browser, token)| {
            major_version(user_agent, token).map(|major| BrowserVersion { browser, major })
        })
        .or_else(|| {
            if !user_agent.contains("Safari/") {
                return None;
            }

            major_version(user_agent, "Version/").map(|major| BrowserVersion {
                browser: Browser::Safari,
                major,
            })
        })
    }

    pub fn is(&self, browser: Browser, major: u32) -> bool {
        self.browser_version() == Some(BrowserVersion { browser, major })
    }
}

fn major_version(user_agent: &str, token: &str) -> Option<u32> {
    let start = user_agent.find(token)? + token.len();
    let digits: String = user_agent[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse().ok()
}
