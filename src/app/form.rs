//! Login form state and the submit hook.
//!
//! `LoginForm` owns the two text inputs and the password visibility flag.
//! Whether the login button is enabled is never stored: it is derived from
//! the current identifier and password every time it is queried.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Glyph used for each grapheme of a masked password.
pub const MASK_CHAR: char = '\u{2022}';

/// Password field visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Visible,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Visible,
            Visibility::Visible => Visibility::Masked,
        }
    }
}

/// Snapshot of the form contents handed to a `SubmitHandler`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Collaborator invoked when the user submits an enabled form.
///
/// Closures taking `&Credentials` implement this trait, so an authentication
/// service can be wired in without touching `LoginForm`.
pub trait SubmitHandler {
    fn on_submit(&mut self, credentials: &Credentials<'_>);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&Credentials<'_>),
{
    fn on_submit(&mut self, credentials: &Credentials<'_>) {
        self(credentials)
    }
}

/// Default handler: the login button does nothing yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSubmit;

impl SubmitHandler for NoopSubmit {
    fn on_submit(&mut self, _credentials: &Credentials<'_>) {}
}

pub struct LoginForm {
    identifier: String,
    password: String,
    visibility: Visibility,
    handler: Box<dyn SubmitHandler>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("identifier", &self.identifier)
            .field("password_len", &self.password.len())
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

impl LoginForm {
    /// Empty form whose submit action is a no-op.
    pub fn new() -> Self {
        Self::with_handler(NoopSubmit)
    }

    pub fn with_handler<H>(handler: H) -> Self
    where
        H: SubmitHandler + 'static,
    {
        LoginForm {
            identifier: String::new(),
            password: String::new(),
            visibility: Visibility::Masked,
            handler: Box::new(handler),
        }
    }

    /// Replace the submit collaborator. The form contents are left untouched.
    pub fn set_handler<H>(&mut self, handler: H)
    where
        H: SubmitHandler + 'static,
    {
        self.handler = Box::new(handler);
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn password_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Any string is accepted, including the empty string.
    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.identifier = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
        tracing::trace!(visibility = ?self.visibility, "password visibility toggled");
    }

    pub fn is_submit_enabled(&self) -> bool {
        submit_enabled(&self.identifier, &self.password)
    }

    pub fn credentials(&self) -> Credentials<'_> {
        Credentials {
            identifier: &self.identifier,
            password: &self.password,
        }
    }

    /// Hand the current credentials to the submit handler.
    ///
    /// A disabled form swallows the request the same way a disabled button
    /// swallows clicks. The form contents are never modified.
    pub fn submit(&mut self) {
        if !self.is_submit_enabled() {
            tracing::debug!("submit ignored: form incomplete");
            return;
        }
        tracing::info!(identifier = %self.identifier, "login submitted");
        let credentials = Credentials {
            identifier: &self.identifier,
            password: &self.password,
        };
        self.handler.on_submit(&credentials);
    }

    /// Password as it should be displayed: one `mask` per grapheme while
    /// masked, the plain text while visible.
    pub fn masked_password(&self, mask: char) -> String {
        match self.visibility {
            Visibility::Visible => self.password.clone(),
            Visibility::Masked => mask_text(&self.password, mask),
        }
    }
}

/// The login button is enabled only when both inputs are non-empty.
pub fn submit_enabled(identifier: &str, password: &str) -> bool {
    !identifier.is_empty() && !password.is_empty()
}

pub fn mask_text(text: &str, mask: char) -> String {
    std::iter::repeat(mask)
        .take(text.graphemes(true).count())
        .collect()
}
