use backoffice_core::{ExistsResponse, ResourceKind};

use crate::modules::auth::{AuthSession, RequestOptions};
use crate::modules::system::http::{expect_response, parse_json_response};

/// Public name lookup; works without a session.
pub(crate) async fn check_name_exists(
    session: &mut AuthSession,
    kind: ResourceKind,
    name: &str,
) -> anyhow::Result<bool> {
    let options = RequestOptions::get().public();
    let outcome = session
        .authorized_request(&kind.exists_path(name), options)
        .await?;
    let response = expect_response(outcome)?;
    let body: ExistsResponse =
        parse_json_response(response, &format!("Checking {} name", kind.singular())).await?;
    Ok(body.exists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::SessionCredentials;
    use mockito::Server;

    #[tokio::test]
    async fn exists_check_sends_no_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/admins/check/root/exists")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"exists":true}"#)
            .create_async()
            .await;

        let mut session = AuthSession::new(
            reqwest::Client::new(),
            server.url(),
            SessionCredentials::default(),
            true,
        );
        let exists = check_name_exists(&mut session, ResourceKind::Admins, "root")
            .await
            .expect("exists");
        assert!(exists);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn exists_check_failure_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/clients/check/Acme%20Corp/exists")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let mut session = AuthSession::new(
            reqwest::Client::new(),
            server.url(),
            SessionCredentials::default(),
            true,
        );
        let err = check_name_exists(&mut session, ResourceKind::Clients, "Acme Corp")
            .await
            .expect_err("failure");
        assert!(err.to_string().contains("Checking client name failed"));
    }
}
