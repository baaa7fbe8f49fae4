use food_client::ApiClient;
use food_client::view::SearchView;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api_url = dotenvy::var("FOOD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    tracing::info!(%api_url, "using food api");

    let client = ApiClient::new(api_url);
    let mut view = SearchView::new();
    let mut stdout = tokio::io::stdout();

    stdout.write_all(view.render().as_bytes()).await?;
    let ticket = view.mount();
    view.run(&client, ticket).await;
    stdout.write_all(view.render().as_bytes()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"search> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let ticket = match line.trim_end() {
            ":quit" => break,
            ":clear" => view.clear(),
            query => {
                view.set_query(query);
                view.submit()
            }
        };

        stdout.write_all(view.render().as_bytes()).await?;
        view.run(&client, ticket).await;
        stdout.write_all(view.render().as_bytes()).await?;
    }

    Ok(())
}
