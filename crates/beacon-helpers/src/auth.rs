//! Authentication factories.

use beacon_schema::{
    AuthImpression, AuthIntent, AuthModalType, AuthService, AuthTrigger, ContextModule,
    CreatedAccount, EmailService, ForgotPasswordModal, ResetYourPassword, SuccessfullyLoggedIn,
};
use serde::Deserialize;

/// Arguments for [`created_account`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatedAccountArgs {
    /// Region that opened the sign-up prompt.
    pub context_module: Option<ContextModule>,
    /// What the user was trying to do.
    pub intent: Option<AuthIntent>,
    /// Whether the user entered onboarding afterwards.
    pub onboarding: Option<bool>,
    /// Provider used to sign up.
    pub service: AuthService,
    /// How the prompt was triggered.
    pub trigger: Option<AuthTrigger>,
    /// ID of the new user.
    pub user_id: String,
}

impl CreatedAccountArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(service: AuthService, user_id: impl Into<String>) -> Self {
        Self {
            context_module: None,
            intent: None,
            onboarding: None,
            service,
            trigger: None,
            user_id: user_id.into(),
        }
    }
}

/// A user creates an account.
#[must_use]
pub fn created_account(args: CreatedAccountArgs) -> CreatedAccount {
    let CreatedAccountArgs {
        context_module,
        intent,
        onboarding,
        service,
        trigger,
        user_id,
    } = args;

    CreatedAccount {
        context_module,
        intent,
        onboarding,
        service,
        trigger,
        user_id,
    }
}

/// Arguments for [`successfully_logged_in`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuccessfullyLoggedInArgs {
    /// Region that opened the login prompt.
    pub context_module: Option<ContextModule>,
    /// What the user was trying to do.
    pub intent: Option<AuthIntent>,
    /// Provider used to log in.
    pub service: AuthService,
    /// How the prompt was triggered.
    pub trigger: Option<AuthTrigger>,
    /// ID of the user.
    pub user_id: String,
    /// Path the user is sent to after login.
    pub auth_redirect: String,
}

impl SuccessfullyLoggedInArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        service: AuthService,
        user_id: impl Into<String>,
        auth_redirect: impl Into<String>,
    ) -> Self {
        Self {
            context_module: None,
            intent: None,
            service,
            trigger: None,
            user_id: user_id.into(),
            auth_redirect: auth_redirect.into(),
        }
    }
}

/// A user logs in.
#[must_use]
pub fn successfully_logged_in(args: SuccessfullyLoggedInArgs) -> SuccessfullyLoggedIn {
    let SuccessfullyLoggedInArgs {
        context_module,
        intent,
        service,
        trigger,
        user_id,
        auth_redirect,
    } = args;

    SuccessfullyLoggedIn {
        context_module,
        intent,
        service,
        trigger,
        user_id,
        auth_redirect,
    }
}

/// Arguments for [`auth_impression`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthImpressionArgs {
    /// Region that opened the form.
    pub context_module: ContextModule,
    /// What the user was trying to do.
    pub intent: AuthIntent,
    /// Headline shown on the form.
    pub modal_copy: Option<String>,
    /// Whether completing the form leads into onboarding.
    pub onboarding: Option<bool>,
    /// How the form was triggered.
    pub trigger: AuthTrigger,
    /// Which form was shown.
    #[serde(rename = "type")]
    pub modal_type: AuthModalType,
}

impl AuthImpressionArgs {
    /// Required arguments only; optional ones start absent.
    pub fn new(
        context_module: ContextModule,
        intent: AuthIntent,
        trigger: AuthTrigger,
        modal_type: AuthModalType,
    ) -> Self {
        Self {
            context_module,
            intent,
            modal_copy: None,
            onboarding: None,
            trigger,
            modal_type,
        }
    }
}

/// A user is shown an authentication form.
#[must_use]
pub fn auth_impression(args: AuthImpressionArgs) -> AuthImpression {
    let AuthImpressionArgs {
        context_module,
        intent,
        modal_copy,
        onboarding,
        trigger,
        modal_type,
    } = args;

    AuthImpression {
        context_module,
        intent,
        modal_copy,
        onboarding,
        trigger,
        modal_type,
    }
}

/// Arguments for [`reset_your_password`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResetYourPasswordArgs {
    /// Path the user is sent to after resetting.
    pub auth_redirect: String,
    /// Region that opened the form.
    pub context_module: ContextModule,
    /// What the user was trying to do.
    pub intent: AuthIntent,
    /// How the form was triggered.
    pub trigger: AuthTrigger,
}

/// A user requests a password reset email. `service` and `type` are fixed.
#[must_use]
pub fn reset_your_password(args: ResetYourPasswordArgs) -> ResetYourPassword {
    let ResetYourPasswordArgs {
        auth_redirect,
        context_module,
        intent,
        trigger,
    } = args;

    ResetYourPassword {
        auth_redirect,
        context_module,
        intent,
        service: EmailService,
        trigger,
        modal_type: ForgotPasswordModal,
    }
}
