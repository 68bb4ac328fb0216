use serde::Deserialize;

use backoffice_core::ErrorDetail;

use crate::modules::auth::RequestOutcome;

/// Unwraps a response; a redirect ends the command with a login hint.
pub(crate) fn expect_response(outcome: RequestOutcome) -> anyhow::Result<reqwest::Response> {
    match outcome {
        RequestOutcome::Response(response) => Ok(response),
        RequestOutcome::Redirect(redirect) => anyhow::bail!("{redirect}"),
    }
}

/// Reads a failed response into the server's `detail` message, or the raw body.
pub(crate) async fn error_message(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorDetail>(&body) {
        Ok(detail) => detail.message(),
        Err(_) => body,
    }
}

pub(crate) async fn print_json_response(response: reqwest::Response) -> anyhow::Result<()> {
    if !response.status().is_success() {
        let status = response.status();
        let message = error_message(response).await;
        anyhow::bail!("Request failed: {status} {message}");
    }
    let body: serde_json::Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

pub(crate) async fn parse_json_response<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
    operation: &str,
) -> anyhow::Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let message = error_message(response).await;
        anyhow::bail!("{operation} failed: {status} {message}");
    }
    Ok(response.json::<T>().await?)
}

pub(crate) fn build_params<const N: usize>(
    pairs: [Option<(String, String)>; N],
) -> Vec<(String, String)> {
    pairs.into_iter().flatten().collect()
}

pub(crate) fn opt_param(key: &str, value: Option<String>) -> Option<(String, String)> {
    value.map(|value| (key.to_string(), value))
}

pub(crate) fn append_params(url: &mut String, params: Vec<(String, String)>) {
    if params.is_empty() {
        return;
    }
    let query = params
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect::<Vec<String>>()
        .join("&");
    url.push('?');
    url.push_str(&query);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_params_skips_empty() {
        let mut url = "/admins/".to_string();
        append_params(&mut url, build_params([opt_param("enabled_only", None)]));
        assert_eq!(url, "/admins/");
    }

    #[test]
    fn append_params_encodes_values() {
        let mut url = "/clients/3/transfer".to_string();
        append_params(
            &mut url,
            build_params([
                opt_param("new_admin_id", Some("7".to_string())),
                opt_param("note", Some("a b".to_string())),
            ]),
        );
        assert_eq!(url, "/clients/3/transfer?new_admin_id=7&note=a%20b");
    }
}
