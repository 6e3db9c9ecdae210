//! Registration flow cases.

use futures::future::BoxFuture;

use crate::browser::BrowserSession;
use crate::harness::{CaseResult, expect_absent, expect_present};

use super::markers;
use super::{CaseContext, DISPLAY_NAME, EMAIL, PASSWORD, RE_PASSWORD, SUBMIT, USERNAME};

/// Open the registration page, fill every field and submit
async fn submit_registration(
    browser: &BrowserSession,
    username: &str,
    display_name: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> CaseResult<()> {
    browser.navigate(super::REGISTER_PATH).await?;
    browser.fill(&USERNAME, username).await?;
    browser.fill(&DISPLAY_NAME, display_name).await?;
    browser.fill(&EMAIL, email).await?;
    browser.fill(&PASSWORD, password).await?;
    browser.fill(&RE_PASSWORD, confirmation).await?;
    browser.click(&SUBMIT).await?;
    Ok(())
}

/// Registering the run's identity succeeds. Creates the account that
/// `duplicate_username` and the valid-login case depend on.
pub fn valid_data(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        let id = cx.identity.clone();
        submit_registration(
            &cx.browser,
            &id.username,
            &id.display_name,
            &id.email,
            &id.password,
            &id.password,
        )
        .await?;
        let page = cx
            .browser
            .settle_until_any(&[markers::REGISTER_OK], cx.submit_wait)
            .await?;
        expect_present(&page, markers::REGISTER_OK)
    })
}

/// Submitting the empty form is rejected
pub fn empty_fields(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        cx.browser.navigate(super::REGISTER_PATH).await?;
        cx.browser.click(&SUBMIT).await?;
        let page = cx
            .browser
            .settle_until_any(&[markers::EMPTY_FIELDS], cx.submit_wait)
            .await?;
        expect_present(&page, markers::EMPTY_FIELDS)
    })
}

/// An email without an `@` is rejected by format validation
pub fn invalid_email(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        let id = cx.identity.with_suffix("b");
        submit_registration(
            &cx.browser,
            &id.username,
            &id.display_name,
            // deliberately not an email address
            &id.username,
            &id.password,
            &id.password,
        )
        .await?;
        let page = cx
            .browser
            .settle_until_any(&[markers::EMAIL_FORMAT], cx.submit_wait)
            .await?;
        expect_present(&page, markers::EMAIL_FORMAT)
    })
}

/// A confirmation that differs from the password is rejected
pub fn password_mismatch(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        let id = cx.identity.with_suffix("c");
        submit_registration(
            &cx.browser,
            &id.username,
            &id.display_name,
            &id.email,
            &id.password,
            "not-the-password",
        )
        .await?;
        let page = cx
            .browser
            .settle_until_any(&[markers::PASSWORD_MISMATCH], cx.submit_wait)
            .await?;
        expect_present(&page, markers::PASSWORD_MISMATCH)
    })
}

/// Re-registering the identity created by `valid_data` is rejected as a
/// duplicate, and must not report success
pub fn duplicate_username(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        let id = cx.identity.clone();
        submit_registration(
            &cx.browser,
            &id.username,
            &id.display_name,
            &id.email,
            &id.password,
            &id.password,
        )
        .await?;
        let page = cx
            .browser
            .settle_until_any(&[markers::DUPLICATE_USERNAME], cx.submit_wait)
            .await?;
        expect_present(&page, markers::DUPLICATE_USERNAME)?;
        expect_absent(&page, markers::REGISTER_OK)
    })
}

/// A tautology payload in every text field must not produce a registration
pub fn sql_injection(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        submit_registration(
            &cx.browser,
            super::INJECTION_PAYLOAD,
            super::INJECTION_PAYLOAD,
            "hacker@example.com",
            super::INJECTION_PAYLOAD,
            super::INJECTION_PAYLOAD,
        )
        .await?;
        // Waiting for the success marker means the full bounded wait passes
        // when the application behaves; only a vulnerable application returns
        // early here.
        let page = cx
            .browser
            .settle_until_any(&[markers::REGISTER_OK], cx.submit_wait)
            .await?;
        expect_absent(&page, markers::REGISTER_OK)
    })
}
