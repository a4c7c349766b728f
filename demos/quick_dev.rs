
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let hc = httpc_test::new_client("http://localhost:3000")?;

    hc.do_get("/api/records").await?.print().await?;

    let req_create = hc.do_post(
        "/api/records",
        json!({
            "title": "Song A",
            "url": "http://x/a"
        }),
    );
    let res = req_create.await?;
    res.print().await?;
    let id = res.json_value::<String>("/id")?;

    hc.do_post("/api/records", json!({ "title": "no url" }))
        .await?
        .print()
        .await?;

    hc.do_get("/api/records").await?.print().await?;
    hc.do_delete(&format!("/api/records/{id}")).await?.print().await?;
    hc.do_delete(&format!("/api/records/{id}")).await?.print().await?;

    Ok(())
}
