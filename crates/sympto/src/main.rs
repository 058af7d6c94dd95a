mod api;
mod trace;

#[cfg(test)]
mod tests;

use libsympto::prelude::*;
use tokio::signal;

use crate::{
  api::{AppState, config::Config},
  trace::build_prometheus,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = Config::from_env()?;
  let _guards = trace::init_tracing(&config, std::io::stdout());

  let dataset = Dataset::load(config.symptoms_path.as_deref(), config.descriptions_path.as_deref())?;

  if !config.spelling {
    return run(config, Sympto::new(dataset, Passthrough)).await;
  }

  let dictionary = match &config.dictionary_path {
    Some(path) => DictionaryCorrector::from_path(path),
    None => DictionaryCorrector::embedded(),
  };

  match dictionary {
    Ok(dictionary) => {
      let dictionary = dictionary.learn(dataset.vocabulary());

      run(config, Sympto::new(dataset, dictionary)).await
    }

    Err(err) => {
      tracing::warn!(%err, "spelling correction unavailable, symptoms will be matched verbatim");

      run(config, Sympto::new(dataset, Passthrough)).await
    }
  }
}

async fn run<C: Corrector>(config: Config, sympto: Sympto<C>) -> anyhow::Result<()> {
  let prometheus = match config.enable_prometheus {
    true => Some(build_prometheus()?),
    false => None,
  };

  let state = AppState {
    config: config.clone(),
    prometheus,
    sympto,
  };

  let app = api::router(state);
  let listener = tokio::net::TcpListener::bind(&config.listen_addr).await.expect("could not create listener");

  tracing::info!(sympto = env!("CARGO_PKG_VERSION"), "listening on {}", listener.local_addr()?.to_string());

  axum::serve(listener, app).with_graceful_shutdown(shutdown()).await.expect("could not start app");

  Ok(())
}

async fn shutdown() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("failed to install ^C handler");
  };

  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("failed to install terminate signal handler")
      .recv()
      .await;
  };

  tokio::select! {
      () = ctrl_c => tracing::info!("received ^C, initiating shutdown"),
      () = terminate => tracing::info!("received terminate signal, initiating shutdown"),
  }
}
