use axum::{
    debug_handler,
    extract::{State, WebSocketUpgrade, ws::{Message, WebSocket}},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, warn};

use super::LiveChannel;

#[debug_handler(state = crate::AppState)]
pub async fn live_ws(
    State(live): State<LiveChannel>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |stream| serve_viewer(live, stream))
}

async fn serve_viewer(live: LiveChannel, stream: WebSocket) {
    let (id, mut rx) = live.register();
    let (mut sender, mut receiver) = stream.split();

    let mut forward_task = tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            if sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut read_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Close(_)) => break,
                Ok(msg) => debug!(connection = %id, ?msg, "ignoring inbound viewer message"),
                Err(err) => {
                    warn!(connection = %id, error = %err, "viewer transport error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut forward_task => read_task.abort(),
        _ = &mut read_task => forward_task.abort(),
    };

    live.unregister(id);
}
