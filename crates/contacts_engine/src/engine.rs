use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use contacts_core::Location;
use contacts_logging::contacts_warn;

use crate::loader::Loader;
use crate::{EngineEvent, NavigationId};

enum EngineCommand {
    Load {
        nav_id: NavigationId,
        location: Location,
    },
}

/// Runs route loaders on a background tokio runtime and reports completions.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(loader: Arc<dyn Loader>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let loader = loader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(loader.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn load(&self, nav_id: NavigationId, location: Location) {
        if self
            .cmd_tx
            .send(EngineCommand::Load { nav_id, location })
            .is_err()
        {
            contacts_warn!("engine stopped; dropping load for navigation {}", nav_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    loader: &dyn Loader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Load { nav_id, location } => {
            let result = loader.load(&location).await;
            let _ = event_tx.send(EngineEvent::LoadCompleted {
                nav_id,
                location,
                result,
            });
        }
    }
}
