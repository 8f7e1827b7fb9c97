//! Authentication events.

use serde::{Deserialize, Serialize};

use crate::pinned::{EmailService, ForgotPasswordModal};
use crate::vocabulary::{AuthIntent, AuthModalType, AuthService, AuthTrigger, ContextModule};

/// A user creates an account.
///
/// ```json
/// {
///   "action": "createdAccount",
///   "context_module": "signUp",
///   "intent": "followArtist",
///   "onboarding": true,
///   "service": "email",
///   "trigger": "click",
///   "user_id": "5d4e2a7a3a8e4f0011e6c6d1"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatedAccount {
    /// Region that opened the sign-up prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_module: Option<ContextModule>,
    /// What the user was trying to do.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<AuthIntent>,
    /// Whether the user entered onboarding afterwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding: Option<bool>,
    /// Provider used to sign up.
    pub service: AuthService,
    /// How the prompt was triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<AuthTrigger>,
    /// ID of the new user.
    pub user_id: String,
}

/// A user logs in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuccessfullyLoggedIn {
    /// Region that opened the login prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_module: Option<ContextModule>,
    /// What the user was trying to do.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<AuthIntent>,
    /// Provider used to log in.
    pub service: AuthService,
    /// How the prompt was triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<AuthTrigger>,
    /// ID of the user.
    pub user_id: String,
    /// Path the user is sent to after login.
    pub auth_redirect: String,
}

/// A user is shown an authentication form.
///
/// ```json
/// {
///   "action": "authImpression",
///   "context_module": "artworkGrid",
///   "intent": "saveArtwork",
///   "modal_copy": "Sign up to save artworks",
///   "trigger": "click",
///   "type": "signup"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthImpression {
    /// Region that opened the form.
    pub context_module: ContextModule,
    /// What the user was trying to do.
    pub intent: AuthIntent,
    /// Headline shown on the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal_copy: Option<String>,
    /// Whether completing the form leads into onboarding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding: Option<bool>,
    /// How the form was triggered.
    pub trigger: AuthTrigger,
    /// Which form was shown.
    #[serde(rename = "type")]
    pub modal_type: AuthModalType,
}

/// A user requests a password reset email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResetYourPassword {
    /// Path the user is sent to after resetting.
    pub auth_redirect: String,
    /// Region that opened the form.
    pub context_module: ContextModule,
    /// What the user was trying to do.
    pub intent: AuthIntent,
    /// Provider of the account being reset.
    pub service: EmailService,
    /// How the form was triggered.
    pub trigger: AuthTrigger,
    /// The forgot-password form.
    #[serde(rename = "type")]
    pub modal_type: ForgotPasswordModal,
}
