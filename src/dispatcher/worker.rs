use crate::database::PageStore;
use crate::dispatcher::protocol::{
    Action, AllPagesReply, CreatePageArgs, CreatePageReply, DeletePageArgs, GetPageArgs,
    SavePageArgs,
};
use crate::dispatcher::Envelope;
use anyhow::Result;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawn the background task that owns the page store and serves its queue
/// address. Consumes envelopes until the dispatcher side closes, answering
/// exactly once per envelope.
pub fn start_store_worker<S>(store: S, mut rx: mpsc::Receiver<Envelope>) -> JoinHandle<()>
where
    S: PageStore + 'static,
{
    tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            let Envelope {
                action,
                payload,
                reply,
            } = envelope;

            let result = handle_request(&store, action, payload)
                .await
                .map_err(|err| format!("{err:#}"));

            if let Err(ref cause) = result {
                tracing::error!(%action, "store operation failed: {cause}");
            }

            // the caller may have disconnected already; its reply is simply
            // discarded, the storage operation itself has completed
            if reply.send(result).is_err() {
                tracing::debug!(%action, "caller went away before the reply was delivered");
            }
        }

        tracing::info!("store worker stopping, mailbox closed");
    })
}

async fn handle_request<S: PageStore>(store: &S, action: Action, payload: Value) -> Result<Value> {
    match action {
        Action::AllPages => {
            let pages = store.all_pages().await?;
            Ok(serde_json::to_value(AllPagesReply { pages })?)
        }
        Action::GetPage => {
            let args: GetPageArgs = serde_json::from_value(payload)?;
            let lookup = store.get_page(&args.name).await?;
            Ok(serde_json::to_value(lookup)?)
        }
        Action::CreatePage => {
            let args: CreatePageArgs = serde_json::from_value(payload)?;
            let id = store.create_page(&args.name, &args.content).await?;
            Ok(serde_json::to_value(CreatePageReply { id })?)
        }
        Action::SavePage => {
            let args: SavePageArgs = serde_json::from_value(payload)?;
            store.save_page(args.id, &args.content).await?;
            Ok(Value::Null)
        }
        Action::DeletePage => {
            let args: DeletePageArgs = serde_json::from_value(payload)?;
            store.delete_page(args.id).await?;
            Ok(Value::Null)
        }
    }
}
