//! Tables built from configuration files over JSON rows.

use std::io::Write;

use serde_json::{json, Value as Json};
use tabledata::{Body, ConfigError, TableConfig, Width};

const CONFIG: &str = r#"
empty_text: "Nenhum cliente encontrado."
default_tab: inativos
columns:
  - { name: id, label: Código, width: 6 }
  - { name: nome, label: Nome, width: fill }
  - { name: acoes, label: Ações }
tabs:
  - { tab_key: ativos, name: ativo, label: Ativos, condition: EQUAL, value: true }
  - { tab_key: inativos, name: ativo, label: Inativos, condition: EQUAL, value: false }
  - { label: Todos }
filters:
  title: Filtros
  items:
    - { name: nome, label: Nome, condition: LIKE }
    - { name: cidade, label: Cidade, condition: STARTS_WITH, default_value: "São" }
order_by:
  - { field: nome, dir: desc }
"#;

fn rows() -> Vec<Json> {
    vec![
        json!({"id": 1, "nome": "Ana", "ativo": true}),
        json!({"id": 2, "nome": "Bruno", "ativo": false}),
        json!({"id": 3, "nome": "Carla", "ativo": false}),
    ]
}

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn yaml_file_drives_the_table() {
    let file = write_config(".yaml", CONFIG);
    let config = TableConfig::from_path(file.path()).unwrap();
    let mut table = config.to_builder::<Json>().unwrap().build();
    let data = rows();

    assert_eq!(table.active_tab_key(), Some("inativos"));
    let view = table.view(&data);
    assert_eq!(
        view.tabs.iter().map(|t| t.count).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(view.headers[0].width, Width::Fixed(6));
    assert_eq!(view.headers[2].width, Width::Fixed(14));
    assert_eq!(
        view.body,
        Body::Rows(vec![
            vec!["3".to_string(), "Carla".to_string(), String::new()],
            vec!["2".to_string(), "Bruno".to_string(), String::new()],
        ])
    );

    let change = table.submit_filters().unwrap();
    assert_eq!(change.params.to_query_string(), "f=cidade%7CSTARTS_WITH%7CS%C3%A3o");
    assert!(table.clear_filters().unwrap().is_empty());
}

#[test]
fn json_file_matches_yaml() {
    let yaml = TableConfig::from_yaml(CONFIG).unwrap();
    let file = write_config(".json", &serde_json::to_string_pretty(&yaml).unwrap());
    assert_eq!(TableConfig::from_path(file.path()).unwrap(), yaml);
}

#[test]
fn empty_tabs_and_filters_are_absent() {
    let config = TableConfig::from_yaml("columns: [{ name: nome }]\ntabs: []\nfilters: { items: [] }").unwrap();
    let mut table = config.to_builder::<Json>().unwrap().build();
    let view = table.view(&rows());
    assert!(view.tabs.is_empty());
    assert!(!view.has_filters);
    assert!(table.clear_filters().is_none());
}

#[test]
fn invalid_tab_value_is_reported() {
    let config = TableConfig::from_yaml(
        "tabs:\n  - { label: Estranho, name: x, condition: IN, value: [1, { a: 2 }] }",
    )
    .unwrap();
    let Err(err) = config.to_builder::<Json>() else {
        panic!("object inside a tab value must be rejected");
    };
    assert!(matches!(err, ConfigError::InvalidTabValue { .. }));
    assert_eq!(err.to_string(), "tab 'Estranho' has an invalid value");
}

#[test]
fn ordering_tolerates_mixed_value_kinds() {
    let config = TableConfig::from_yaml(
        "columns: [{ name: preco }]\norder_by: [{ field: preco }]",
    )
    .unwrap();
    let table = config.to_builder::<Json>().unwrap().build();
    let kinds = [json!("12"), json!(12), Json::Null, json!(3.5)];
    let data: Vec<Json> = (0..60)
        .map(|i| json!({ "id": i, "preco": kinds[i % kinds.len()] }))
        .collect();

    let visible = table.visible_rows(&data);
    let precos: Vec<&Json> = visible.iter().map(|r| &r["preco"]).collect();
    assert_eq!(precos.len(), 60);
    assert_eq!(precos[0], &json!(3.5));
    assert_eq!(precos[15], &json!(12));
    assert_eq!(precos[30], &json!("12"));
    assert_eq!(precos[59], &Json::Null);
}
