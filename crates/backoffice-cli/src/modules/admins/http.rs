use backoffice_core::{Admin, Record};

use crate::modules::system::http::{append_params, build_params, opt_param};

pub(crate) fn list_path(enabled_only: bool) -> String {
    let mut url = Admin::KIND.collection_path();
    let params = build_params([opt_param(
        "enabled_only",
        enabled_only.then(|| "true".to_string()),
    )]);
    append_params(&mut url, params);
    url
}

pub(crate) fn by_name_path(name: &str) -> String {
    format!(
        "{}name/{}",
        Admin::KIND.collection_path(),
        urlencoding::encode(name)
    )
}

pub(crate) fn toggle_status_path(name: &str) -> String {
    format!(
        "{}{}/toggle-status",
        Admin::KIND.collection_path(),
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_adds_filter_only_when_set() {
        assert_eq!(list_path(false), "/admins/");
        assert_eq!(list_path(true), "/admins/?enabled_only=true");
    }

    #[test]
    fn by_name_path_encodes_name() {
        assert_eq!(by_name_path("root"), "/admins/name/root");
        assert_eq!(by_name_path("ops team"), "/admins/name/ops%20team");
    }

    #[test]
    fn toggle_status_path_encodes_name() {
        assert_eq!(toggle_status_path("root"), "/admins/root/toggle-status");
        assert_eq!(toggle_status_path("a b"), "/admins/a%20b/toggle-status");
    }
}
