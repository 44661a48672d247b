use tokio::sync::mpsc;

use crate::state::ClientCommand;

/// Cloneable handle the UI uses to push commands at the driver task.
#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ClientCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: ClientCommand) {
        let _ = self.tx.send(command);
    }
}
