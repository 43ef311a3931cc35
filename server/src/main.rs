use glass_todo_lib::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    glass_todo_lib::init_tracing();
    let config = Config::load()?;
    glass_todo_lib::run(config).await
}
