//! Login flow cases.
//!
//! The valid-login case signs in with the account created by the valid
//! registration case earlier in the run.

use futures::future::BoxFuture;

use crate::browser::BrowserSession;
use crate::harness::{CaseResult, expect_absent, expect_any, expect_present};

use super::markers;
use super::{CaseContext, PASSWORD, SUBMIT, USERNAME};

/// Open the login page, fill the credentials and submit
async fn submit_login(browser: &BrowserSession, username: &str, password: &str) -> CaseResult<()> {
    browser.navigate(super::LOGIN_PATH).await?;
    browser.fill(&USERNAME, username).await?;
    browser.fill(&PASSWORD, password).await?;
    browser.click(&SUBMIT).await?;
    Ok(())
}

/// The registered identity can sign in
pub fn valid_data(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        let id = cx.identity.clone();
        submit_login(&cx.browser, &id.username, &id.password).await?;
        let page = cx
            .browser
            .settle_until_any(&[markers::LOGIN_OK], cx.submit_wait)
            .await?;
        expect_present(&page, markers::LOGIN_OK)
    })
}

/// A wrong password for a registered user is rejected
pub fn wrong_password(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        let id = cx.identity.clone();
        let wrong = format!("{}-wrong", id.password);
        submit_login(&cx.browser, &id.username, &wrong).await?;
        let page = cx
            .browser
            .settle_until_any(markers::LOGIN_REJECTED, cx.submit_wait)
            .await?;
        expect_any(&page, markers::LOGIN_REJECTED)
    })
}

/// Submitting the empty form is rejected
pub fn empty_fields(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        cx.browser.navigate(super::LOGIN_PATH).await?;
        cx.browser.click(&SUBMIT).await?;
        let page = cx
            .browser
            .settle_until_any(&[markers::EMPTY_FIELDS], cx.submit_wait)
            .await?;
        expect_present(&page, markers::EMPTY_FIELDS)
    })
}

/// A username that was never registered cannot sign in
pub fn unknown_username(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        let ghost = cx.identity.with_suffix("ghost");
        submit_login(&cx.browser, &ghost.username, &ghost.password).await?;
        let page = cx
            .browser
            .settle_until_any(markers::UNKNOWN_USER, cx.submit_wait)
            .await?;
        expect_any(&page, markers::UNKNOWN_USER)
    })
}

/// A tautology payload must not produce a signed-in session
pub fn sql_injection(cx: &mut CaseContext) -> BoxFuture<'_, CaseResult<()>> {
    Box::pin(async move {
        submit_login(&cx.browser, super::INJECTION_PAYLOAD, super::INJECTION_PAYLOAD).await?;
        let page = cx
            .browser
            .settle_until_any(&[markers::LOGIN_OK], cx.submit_wait)
            .await?;
        expect_absent(&page, markers::LOGIN_OK)
    })
}
