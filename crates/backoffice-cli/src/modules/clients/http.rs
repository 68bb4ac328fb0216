use backoffice_core::{Client, Record};

use crate::modules::clients::args::BulkAction;
use crate::modules::system::http::{append_params, build_params, opt_param};

fn base() -> String {
    Client::KIND.collection_path()
}

pub(crate) fn my_clients_path() -> String {
    format!("{}my", base())
}

pub(crate) fn by_name_path(name: &str) -> String {
    format!("{}name/{}", base(), urlencoding::encode(name))
}

pub(crate) fn by_admin_path(admin_id: i64) -> String {
    format!("{}admin/{admin_id}", base())
}

pub(crate) fn rename_path(id: i64, name: &str) -> String {
    let mut url = format!("{}/name", Client::KIND.item_path(id));
    append_params(
        &mut url,
        build_params([opt_param("name", Some(name.to_string()))]),
    );
    url
}

pub(crate) fn status_path(id: i64, enabled: bool) -> String {
    let mut url = format!("{}/status", Client::KIND.item_path(id));
    append_params(
        &mut url,
        build_params([opt_param("enabled", Some(enabled.to_string()))]),
    );
    url
}

pub(crate) fn transfer_path(id: i64, new_admin_id: i64) -> String {
    let mut url = format!("{}/transfer", Client::KIND.item_path(id));
    append_params(
        &mut url,
        build_params([opt_param("new_admin_id", Some(new_admin_id.to_string()))]),
    );
    url
}

pub(crate) fn bulk_path(action: BulkAction) -> String {
    format!("{}bulk/{}", base(), action.as_str())
}
