//! Ingestion Service Module
//!
//! Accepts document submissions and runs each document through its processing lifecycle.
//!
//! ## Workflow
//! 1. **Submit**: A client posts a source type and content.
//! 2. **Store**: The document is stored as `pending` and its id is returned at once.
//! 3. **Process**: A detached task moves it to `processing`, chunks the content and
//!    stores the outcome as `completed` or `failed`.
//! 4. **Poll**: Clients read the full record or just its status at any time.
//!
//! ## Submodules
//! - **`engine`**: The lifecycle state machine and the background processing task.
//! - **`registry`**: Maps source types to the processors that transform their content.
//! - **`chunker`**: The fixed-size chunking transform.
//! - **`handlers`** / **`protocol`**: The HTTP surface.

pub mod chunker;
pub mod engine;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod types;
