use futures::future::LocalFutureObj;
use futures::task::LocalSpawn;
use futures::task::SpawnError;

/// Runs local futures on the browser's microtask queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Microtasks;

impl LocalSpawn for Microtasks {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
