use backoffice_core::{project_rows, Admin, Client, Record, StatusBadge};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

fn client(id: i64, name: &str, enabled: bool) -> Client {
    Client {
        client_id: id,
        name: name.to_string(),
        email: format!("{name}@example.com"),
        address: None,
        phones: None,
        enabled,
        date_created: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("date"),
        admin_id: None,
    }
}

#[test]
fn empty_collection_projects_no_rows() {
    let clients: Vec<Client> = Vec::new();
    assert!(project_rows(&clients).is_empty());
}

#[test]
fn admin_collection_parses_from_list_body() {
    let body = r#"[
        {"admin_id":1,"name":"root","email":"root@x.com","enabled":true,"date_created":"2024-01-01T00:00:00Z","roles":[1,2]},
        {"admin_id":2,"name":"ops","email":"ops@x.com","enabled":false,"date_created":"2024-02-01T10:00:00"}
    ]"#;
    let admins: Vec<Admin> = serde_json::from_str(body).expect("parse admins");
    let rows = project_rows(&admins);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].extra, vec!["1,2".to_string()]);
    assert_eq!(rows[1].status, StatusBadge::Inactive);
}

proptest! {
    #[test]
    fn one_row_per_record_in_order(entries in proptest::collection::vec(("[a-z]{1,12}", any::<bool>()), 0..32)) {
        let clients: Vec<Client> = entries
            .iter()
            .enumerate()
            .map(|(idx, (name, enabled))| client(idx as i64 + 1, name, *enabled))
            .collect();
        let rows = project_rows(&clients);
        prop_assert_eq!(rows.len(), clients.len());
        for (row, record) in rows.iter().zip(clients.iter()) {
            prop_assert_eq!(row.id, record.id());
            prop_assert_eq!(&row.name, &record.name);
            prop_assert_eq!(row.status, StatusBadge::from_enabled(record.enabled));
            prop_assert_eq!(row.extra.len(), Client::extra_columns().len());
        }
    }
}
