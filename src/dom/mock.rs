//! A recording in-memory [`DomSurface`] for tests.
//!
//! `MockDom` tracks which selectors exist, stores attributes/HTML/text per
//! selector, and records every mutating call in order so tests can assert
//! both final state and call sequence.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use std::time::Duration;

use super::DomSurface;

/// One recorded mutation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCall {
    ReplaceHtml { selector: String },
    SetText { selector: String, text: String },
    SetAttribute { selector: String, name: String, value: String },
    Focus { selector: String },
    ToggleChildClass { selector: String, class: String },
    ScrollToTop,
    Reload,
}

#[derive(Debug, Default)]
struct Inner {
    present: BTreeSet<String>,
    attributes: BTreeMap<(String, String), String>,
    html: BTreeMap<String, String>,
    text: BTreeMap<String, String>,
    calls: Vec<DomCall>,
}

/// In-memory DOM double.
#[derive(Debug, Default)]
pub struct MockDom {
    inner: Mutex<Inner>,
}

impl MockDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a selector as present in the document.
    pub fn with_element(self, selector: &str) -> Self {
        self.inner.lock().unwrap().present.insert(selector.to_string());
        self
    }

    /// Registers a present selector carrying an attribute.
    pub fn with_attribute(self, selector: &str, name: &str, value: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.present.insert(selector.to_string());
            inner
                .attributes
                .insert((selector.to_string(), name.to_string()), value.to_string());
        }
        self
    }

    pub fn calls(&self) -> Vec<DomCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn html(&self, selector: &str) -> Option<String> {
        self.inner.lock().unwrap().html.get(selector).cloned()
    }

    pub fn text(&self, selector: &str) -> Option<String> {
        self.inner.lock().unwrap().text.get(selector).cloned()
    }

    /// Snapshot of every attribute, for idempotence assertions.
    pub fn attributes(&self) -> BTreeMap<(String, String), String> {
        self.inner.lock().unwrap().attributes.clone()
    }

    pub fn focused(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter_map(|call| match call {
                DomCall::Focus { selector } => Some(selector.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reload_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| matches!(call, DomCall::Reload))
            .count()
    }
}

impl DomSurface for MockDom {
    fn contains(&self, selector: &str) -> bool {
        self.inner.lock().unwrap().present.contains(selector)
    }

    fn replace_html(&self, selector: &str, html: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.html.insert(selector.to_string(), html.to_string());
        inner.calls.push(DomCall::ReplaceHtml {
            selector: selector.to_string(),
        });
    }

    fn set_text(&self, selector: &str, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.text.insert(selector.to_string(), text.to_string());
        inner.calls.push(DomCall::SetText {
            selector: selector.to_string(),
            text: text.to_string(),
        });
    }

    fn set_attribute(&self, selector: &str, name: &str, value: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .attributes
            .insert((selector.to_string(), name.to_string()), value.to_string());
        inner.calls.push(DomCall::SetAttribute {
            selector: selector.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .attributes
            .get(&(selector.to_string(), name.to_string()))
            .cloned()
    }

    fn focus(&self, selector: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if !inner.present.contains(selector) {
            return false;
        }
        inner.calls.push(DomCall::Focus {
            selector: selector.to_string(),
        });
        true
    }

    fn toggle_child_class(&self, selector: &str, class: &str) {
        self.inner.lock().unwrap().calls.push(DomCall::ToggleChildClass {
            selector: selector.to_string(),
            class: class.to_string(),
        });
    }

    fn scroll_to_top(&self, _duration: Duration) {
        self.inner.lock().unwrap().calls.push(DomCall::ScrollToTop);
    }

    fn reload(&self) {
        self.inner.lock().unwrap().calls.push(DomCall::Reload);
    }
}
