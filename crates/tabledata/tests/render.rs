//! Text rendering snapshots.

use tabledata::{
    Align, BorderStyle, ColumnSpec, Condition, DataTable, FilterSpec, Seekable, TabSpec,
};

#[derive(Seekable)]
struct Produto {
    #[seek(Number)]
    id: i64,
    #[seek(String)]
    nome: String,
    #[seek(Number, rename = "valorVenda")]
    valor_venda: f64,
    #[seek(Bool)]
    ativo: bool,
}

fn produtos() -> Vec<Produto> {
    vec![
        Produto { id: 1, nome: "Caneta azul".into(), valor_venda: 2.5, ativo: true },
        Produto { id: 2, nome: "Caderno".into(), valor_venda: 18.9, ativo: false },
        Produto { id: 3, nome: "Mochila escolar".into(), valor_venda: 129.9, ativo: true },
    ]
}

fn table() -> DataTable<Produto> {
    DataTable::<Produto>::builder()
        .column(ColumnSpec::new(Produto::NOME, "Produto"))
        .column(ColumnSpec::new(Produto::VALOR_VENDA, "Venda").align(Align::Right))
        .column(ColumnSpec::new("acoes", "Ações").render(|_, p: &Produto| format!("editar #{}", p.id)))
        .actions_width(10)
        .tab(TabSpec::new("Ativos").field(Produto::ATIVO).condition(Condition::Equal).value(true))
        .tab(TabSpec::new("Todos"))
        .filter(FilterSpec::new("nome", "Nome", Condition::Like))
        .filters_title("Filtros")
        .empty_text("Nenhum produto encontrado.")
        .build()
}

#[test]
fn light_table_with_tabs() {
    let out = table().render_text(&produtos(), 60, BorderStyle::Light);
    insta::assert_snapshot!(out, @r"
    [Ativos (2)]  Todos (3)
    Filtros: 0 active
    ┌─────────────────┬───────┬────────────┐
    │ Produto         │ Venda │      Ações │
    ├─────────────────┼───────┼────────────┤
    │ Caneta azul     │   2.5 │  editar #1 │
    │ Mochila escolar │ 129.9 │  editar #3 │
    └─────────────────┴───────┴────────────┘
    ");
}

#[test]
fn ascii_empty_state() {
    let mut table = table();
    table.set_filter_value("nome", "mochila");
    let out = table.render_text(&[], 60, BorderStyle::Ascii);
    insta::assert_snapshot!(out, @r"
    [Ativos (0)]  Todos (0)
    Filtros: 1 active
    +---------+-------+------------+
    | Produto | Venda |      Ações |
    +---------+-------+------------+
    | Nenhum produto encontrado.   |
    +---------+-------+------------+
    ");
}

#[test]
fn view_serializes_for_json_output() {
    let view = table().view(&produtos());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["tabs"][0]["active"], true);
    assert_eq!(json["headers"][2]["is_actions"], true);
    assert_eq!(json["headers"][2]["width"], 10);
    assert_eq!(json["headers"][2]["align"], "right");
    assert_eq!(json["body"]["kind"], "rows");
    assert_eq!(json["body"]["content"][1][0], "Mochila escolar");
}
