//! End-to-end table scenarios: tabs, badges, columns, server filters and
//! empty states.

use std::sync::{Arc, Mutex};

use tabledata::{
    apply_tab_filter, Body, ColumnSpec, Condition, DataTable, FilterSpec, Number, OrderBy,
    Seekable, ServerFilterChange, TabControl, TabSet, TabSpec, Value,
};

#[derive(Debug, Clone, Seekable)]
struct Cliente {
    #[seek(Number)]
    id: i64,
    #[seek(String)]
    nome: String,
    #[seek(String, optional)]
    email: Option<String>,
    #[seek(Bool)]
    ativo: bool,
    #[seek(Number, rename = "valorVenda")]
    valor_venda: f64,
}

fn cliente(id: i64, nome: &str, ativo: bool, valor_venda: f64) -> Cliente {
    Cliente {
        id,
        nome: nome.to_string(),
        email: None,
        ativo,
        valor_venda,
    }
}

fn clientes() -> Vec<Cliente> {
    vec![
        cliente(1, "Ana Souza", true, 200.0),
        cliente(2, "Bruno Lima", false, 250.0),
        cliente(3, "Carla Dias", true, 200.0),
        cliente(4, "Daniel Ana", true, 120.0),
    ]
}

fn ids(rows: &[&Cliente]) -> Vec<i64> {
    rows.iter().map(|c| c.id).collect()
}

fn tab(field: &str, condition: Condition, value: impl Into<tabledata::Operand>) -> TabSpec {
    TabSpec::new("t").field(field).condition(condition).value(value)
}

#[test]
fn every_condition_filters_as_documented() {
    let data = clientes();
    let run = |spec: TabSpec| ids(&apply_tab_filter(&data, Some(&spec), Cliente::accessor));

    assert_eq!(run(tab("id", Condition::Equal, 2)), vec![2]);
    assert_eq!(run(tab("id", Condition::Equal, "2")), Vec::<i64>::new());
    assert_eq!(run(tab("id", Condition::NotEqual, 2)), vec![1, 3, 4]);
    assert_eq!(run(tab("valorVenda", Condition::GreaterThan, 200)), vec![2]);
    assert_eq!(run(tab("valorVenda", Condition::GreaterOrEqual, 200)), vec![1, 2, 3]);
    assert_eq!(run(tab("valorVenda", Condition::LessThan, 200)), vec![4]);
    assert_eq!(run(tab("valorVenda", Condition::LessOrEqual, "200")), vec![1, 3, 4]);
    assert_eq!(run(tab("nome", Condition::Like, "ana")), vec![1, 4]);
    assert_eq!(run(tab("nome", Condition::StartsWith, "CAR")), vec![3]);
    assert_eq!(run(tab("nome", Condition::EndsWith, "lima")), vec![2]);
    assert_eq!(run(tab("id", Condition::In, vec![1, 4])), vec![1, 4]);
    assert_eq!(run(tab("ativo", Condition::Equal, false)), vec![2]);
}

#[test]
fn all_is_identity() {
    let data = clientes();
    let everything = TabSpec::new("Todos").field("id").value(99);
    assert_eq!(
        ids(&apply_tab_filter(&data, Some(&everything), Cliente::accessor)),
        vec![1, 2, 3, 4]
    );
    assert_eq!(ids(&apply_tab_filter(&data, None, Cliente::accessor)), vec![1, 2, 3, 4]);
}

fn exploding<'a>(c: &'a Cliente, field: &str) -> Value<'a> {
    if field == "valorVenda" {
        panic!("cannot read valorVenda");
    }
    c.seeker_field_value(field)
}

#[test]
fn evaluation_failure_fails_open() {
    let data = clientes();
    let table = DataTable::builder_with_accessor(exploding)
        .column(ColumnSpec::new("nome", "Nome"))
        .tab(TabSpec::new("Caros").field("valorVenda").condition(Condition::GreaterThan).value(1000))
        .build();

    assert_eq!(ids(&table.visible_rows(&data)), vec![1, 2, 3, 4]);
    assert_eq!(table.tab_counts(&data)[0].count, 4);
}

#[test]
fn columns_fall_back_to_string_form() {
    let mut data = vec![cliente(7, "Eva", true, 99.5)];
    data[0].email = None;
    let table = DataTable::<Cliente>::builder()
        .column(ColumnSpec::new(Cliente::ID, "Código"))
        .column(ColumnSpec::new(Cliente::EMAIL, "E-mail"))
        .column(ColumnSpec::new(Cliente::VALOR_VENDA, "Venda"))
        .column(ColumnSpec::new(Cliente::ATIVO, "Ativo"))
        .column(ColumnSpec::new("inexistente", "?"))
        .column(
            ColumnSpec::new(Cliente::NOME, "Nome")
                .render(|value: &Value<'_>, row: &Cliente| format!("{} (#{})", value, row.id)),
        )
        .build();

    assert_eq!(
        table.view(&data).body,
        Body::Rows(vec![vec![
            "7".to_string(),
            String::new(),
            "99.5".to_string(),
            "true".to_string(),
            String::new(),
            "Eva (#7)".to_string(),
        ]])
    );
}

#[test]
fn tab_keys_are_stable_and_unique() {
    let specs = vec![
        TabSpec::new("Todos"),
        TabSpec::new("Todos"),
        TabSpec::new("Ativos").field("ativo").condition(Condition::Equal).value(true),
        TabSpec::new("Fixa").tab_key("fixa"),
    ];
    let first = TabSet::new(specs.clone());
    let second = TabSet::new(specs);
    assert_eq!(first.keys(), second.keys());
    assert_eq!(first.keys(), ["0:all:Todos", "1:all:Todos", "2:ativo:Ativos", "fixa"]);
}

#[test]
fn filter_submit_serializes_non_blank_values() {
    let received: Arc<Mutex<Vec<ServerFilterChange>>> = Arc::default();
    let sink = Arc::clone(&received);
    let mut table = DataTable::<Cliente>::builder()
        .column(ColumnSpec::new(Cliente::NOME, "Nome"))
        .filter(FilterSpec::new("nome", "Nome", Condition::Like))
        .filter(FilterSpec::new("email", "E-mail", Condition::Equal))
        .on_server_filter_change(move |change| sink.lock().unwrap().push(change.clone()))
        .build();

    table.set_filter_value("nome", "Ana");
    table.set_filter_value("email", "");
    let change = table.submit_filters().unwrap();

    assert_eq!(change.filters.len(), 1);
    assert_eq!(change.filters[0].field, "nome");
    assert_eq!(change.filters[0].condition, Condition::Like);
    assert_eq!(change.filters[0].value, "Ana");
    assert_eq!(change.params.get_all("f"), vec!["nome|LIKE|Ana"]);
    assert_eq!(change.params.len(), 1);
    assert_eq!(*received.lock().unwrap(), vec![change]);
}

fn status_table() -> DataTable<Cliente> {
    DataTable::<Cliente>::builder()
        .column(ColumnSpec::new(Cliente::ID, "Id"))
        .column(ColumnSpec::new(Cliente::NOME, "Nome"))
        .tab(TabSpec::new("Ativos").field(Cliente::ATIVO).condition(Condition::Equal).value(true))
        .tab(TabSpec::new("Inativos").field(Cliente::ATIVO).condition(Condition::Equal).value(false))
        .build()
}

#[test]
fn status_tabs_count_and_switch() {
    let data = vec![
        cliente(1, "Ana", true, 0.0),
        cliente(2, "Bruno", false, 0.0),
        cliente(3, "Carla", true, 0.0),
    ];
    let mut table = status_table();

    let view = table.view(&data);
    let badges: Vec<(&str, usize, bool)> = view
        .tabs
        .iter()
        .map(|t| (t.label.as_str(), t.count, t.active))
        .collect();
    assert_eq!(badges, vec![("Ativos", 2, true), ("Inativos", 1, false)]);

    table.select_tab("1:ativo:Inativos");
    assert_eq!(ids(&table.visible_rows(&data)), vec![2]);
    assert_eq!(
        table.view(&data).tabs.iter().map(|t| t.count).collect::<Vec<_>>(),
        vec![2, 1]
    );
}

#[test]
fn controlled_tabs_wait_for_the_caller() {
    let data = vec![cliente(1, "Ana", true, 0.0), cliente(2, "Bruno", false, 0.0)];
    let requested: Arc<Mutex<Option<String>>> = Arc::default();
    let sink = Arc::clone(&requested);
    let mut table = DataTable::<Cliente>::builder()
        .column(ColumnSpec::new(Cliente::NOME, "Nome"))
        .tab(TabSpec::new("Ativos").tab_key("ativos").field("ativo").condition(Condition::Equal).value(true))
        .tab(TabSpec::new("Inativos").tab_key("inativos").field("ativo").condition(Condition::Equal).value(false))
        .tab_control(TabControl::controlled("ativos", move |key| {
            *sink.lock().unwrap() = Some(key.to_string());
        }))
        .build();

    table.select_tab("inativos");
    assert_eq!(requested.lock().unwrap().as_deref(), Some("inativos"));
    assert_eq!(ids(&table.visible_rows(&data)), vec![1]);

    table.set_active_key("inativos");
    assert_eq!(ids(&table.visible_rows(&data)), vec![2]);
}

#[test]
fn unknown_tab_key_shows_everything() {
    let data = clientes();
    let mut table = status_table();
    table.select_tab("nao-existe");
    assert_eq!(table.visible_rows(&data).len(), 4);
    assert!(table.view(&data).tabs.iter().all(|t| !t.active));
}

#[test]
fn numeric_threshold() {
    let data = vec![
        cliente(1, "a", true, 200.0),
        cliente(2, "b", true, 250.0),
        cliente(3, "c", true, 200.0),
        cliente(4, "d", true, 120.0),
    ];
    let table = DataTable::<Cliente>::builder()
        .column(ColumnSpec::new(Cliente::ID, "Id"))
        .tab(
            TabSpec::new("Acima de 250")
                .field(Cliente::VALOR_VENDA)
                .condition(Condition::GreaterOrEqual)
                .value(250),
        )
        .build();
    assert_eq!(ids(&table.visible_rows(&data)), vec![2]);
    assert_eq!(table.tab_counts(&data)[0].count, 1);
}

#[test]
fn empty_dataset_renders_one_empty_row() {
    let table = DataTable::<Cliente>::builder()
        .column(ColumnSpec::new(Cliente::NOME, "Nome"))
        .column(ColumnSpec::new("acoes", "Ações"))
        .empty_text("Nenhum cliente encontrado.")
        .build();
    let view = table.view(&[]);
    assert_eq!(view.body, Body::Empty("Nenhum cliente encontrado.".to_string()));
    assert_eq!(view.body.row_count(), 1);
}

#[test]
fn ordering_follows_tab_filter() {
    let data = clientes();
    let table = DataTable::<Cliente>::builder()
        .column(ColumnSpec::new(Cliente::NOME, "Nome"))
        .tab(TabSpec::new("Ativos").field("ativo").condition(Condition::Equal).value(true))
        .order_by(OrderBy::desc(Cliente::VALOR_VENDA))
        .order_by(OrderBy::asc("nome"))
        .build();
    assert_eq!(ids(&table.visible_rows(&data)), vec![1, 3, 4]);
}

#[test]
fn numbers_compare_across_representations() {
    let data = clientes();
    let spec = TabSpec::new("Exato").field("valorVenda").condition(Condition::Equal).value(Number::I64(250));
    assert_eq!(ids(&apply_tab_filter(&data, Some(&spec), Cliente::accessor)), vec![2]);
}
