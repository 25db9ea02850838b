mod common;

use std::sync::Arc;

use ftsearch_client::{create_index, query::words, Index, Mode, SortOrder};
use ftsearch_core::options::{IndexOptions, Output};
use ftsearch_core::reply::Reply;
use ftsearch_core::schema::{FieldType, Schema};

use common::{args, ScriptedClient};

async fn bound_index(
    client: &Arc<ScriptedClient>,
    options: IndexOptions,
) -> Index<ScriptedClient> {
    client.push(Ok(Reply::Array(vec!["index_name".into(), "books".into()])));
    let schema = Schema::new().field("title", FieldType::Text);
    create_index(client.clone(), "books", &schema, options)
        .await
        .expect("attach to existing index")
}

fn empty_search_reply() -> Reply {
    Reply::Array(vec![Reply::Int(0)])
}

#[tokio::test]
async fn intersect_joins_terms_with_a_space() -> anyhow::Result<()> {
    let client = Arc::new(ScriptedClient::new(vec![]));
    let index = bound_index(&client, IndexOptions::default()).await;

    client.push(Ok(empty_search_reply()));
    index.query("hello, world!").execute().await?;

    let (command, sent) = client.calls()[1].clone();
    assert_eq!(command, "FT.SEARCH");
    assert_eq!(sent, args(&["books", "hello world"]));
    Ok(())
}

#[tokio::test]
async fn union_joins_terms_with_a_pipe() -> anyhow::Result<()> {
    let client = Arc::new(ScriptedClient::new(vec![]));
    let index = bound_index(&client, IndexOptions::default()).await;

    client.push(Ok(empty_search_reply()));
    index.query("hello world").mode(Mode::Union).execute().await?;

    assert_eq!(client.calls()[1].1, args(&["books", "hello|world"]));
    Ok(())
}

#[tokio::test]
async fn direct_mode_passes_the_expression_verbatim() -> anyhow::Result<()> {
    let client = Arc::new(ScriptedClient::new(vec![]));
    let index = bound_index(&client, IndexOptions::default()).await;

    client.push(Ok(empty_search_reply()));
    index
        .query("@title:(dune|foundation) @price:[0 20]")
        .mode(Mode::Direct)
        .execute()
        .await?;

    assert_eq!(
        client.calls()[1].1,
        args(&["books", "@title:(dune|foundation) @price:[0 20]"])
    );
    Ok(())
}

#[tokio::test]
async fn range_and_paging_are_independent_clauses() -> anyhow::Result<()> {
    let client = Arc::new(ScriptedClient::new(vec![]));
    let index = bound_index(&client, IndexOptions::default()).await;

    client.push(Ok(empty_search_reply()));
    index
        .query("dune")
        .range(5, 10)
        .page(0, 20)
        .execute()
        .await?;

    assert_eq!(
        client.calls()[1].1,
        args(&["books", "dune", "LIMIT", "5", "10", "LIMIT", "0", "20"]),
        "both window clauses present, range first"
    );
    Ok(())
}

#[tokio::test]
async fn clauses_serialize_in_fixed_order() -> anyhow::Result<()> {
    let client = Arc::new(ScriptedClient::new(vec![]));
    let options = IndexOptions {
        in_fields: vec!["title".to_string(), "body".to_string()],
        ..IndexOptions::default()
    };
    let index = bound_index(&client, options).await;

    client.push(Ok(empty_search_reply()));
    index
        .query("dune")
        .page(10, 5)
        .order_by("price", SortOrder::Desc)
        .range(0, 100)
        .execute()
        .await?;

    assert_eq!(
        client.calls()[1].1,
        args(&[
            "books", "dune", "INFIELDS", "2", "title", "body", "LIMIT", "0", "100", "SORTBY",
            "price", "DESC", "LIMIT", "10", "5",
        ]),
        "expression, field restriction, range, sort, paging"
    );
    Ok(())
}

#[tokio::test]
async fn beautified_search_decodes_records_in_order() -> anyhow::Result<()> {
    let client = Arc::new(ScriptedClient::new(vec![]));
    let options = IndexOptions {
        output: Output::Beautify,
        ..IndexOptions::default()
    };
    let index = bound_index(&client, options).await;

    client.push(Ok(Reply::Array(vec![
        Reply::Int(2),
        "doc:1".into(),
        Reply::Array(vec!["title".into(), "dune".into()]),
        "doc:2".into(),
        Reply::Array(vec!["title".into(), "foundation".into()]),
    ])));
    let records = index
        .query("dune foundation")
        .mode(Mode::Union)
        .execute()
        .await?
        .records()
        .expect("beautified reply");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id(), "doc:1");
    assert_eq!(records[0].field("title"), Some(&"dune".into()));
    assert_eq!(records[1].id(), "doc:2");
    Ok(())
}

#[tokio::test]
async fn raw_search_returns_the_reply_unchanged() -> anyhow::Result<()> {
    let client = Arc::new(ScriptedClient::new(vec![]));
    let index = bound_index(&client, IndexOptions::default()).await;

    let reply = Reply::Array(vec![Reply::Int(1), "doc:1".into(), Reply::Array(vec![])]);
    client.push(Ok(reply.clone()));
    let got = index.query("dune").execute().await?.raw().expect("raw reply");
    assert_eq!(got, reply);
    Ok(())
}

#[test]
fn mode_parse_maps_aliases_and_falls_back_to_direct() {
    assert_eq!(Mode::parse("and"), Mode::Intersect);
    assert_eq!(Mode::parse("intersect"), Mode::Intersect);
    assert_eq!(Mode::parse("or"), Mode::Union);
    assert_eq!(Mode::parse("union"), Mode::Union);
    assert_eq!(Mode::parse("exact"), Mode::Direct);
    assert_eq!(Mode::parse(""), Mode::Direct);
}

#[test]
fn words_extracts_alphanumeric_runs() {
    assert_eq!(words("hello, world!"), vec!["hello", "world"]);
    assert_eq!(words("snake_case stays"), vec!["snake_case", "stays"]);
    assert_eq!(words("v2.0-beta"), vec!["v2", "0", "beta"]);
    assert!(words("  ... ").is_empty());
}
