/*!
Thin async client for the Puppy Bowl roster API, compiling to WASM and talking to the
server through the browser's `fetch`.

Every operation returns an explicit [Result]; failures are logged at the call site with
the context of the request and then handed back to the caller.

```no_run
use puppy_bowl_client::{ApiClient, RosterApi};
use puppy_bowl_client::protocol::API_BASE;

# async fn run() -> Result<(), puppy_bowl_client::ClientError> {
let client = ApiClient::for_cohort(API_BASE, "2109-UNF-HY-WEB-PT");
for player in client.fetch_all_players().await? {
    log::info!("{} #{}", player.name, player.id);
}
# Ok(())
# }
```
*/

mod api;
mod error;
mod utils;

pub use api::{ApiClient, RosterApi};
#[cfg(feature = "mock")]
pub use api::MockRosterApi;
pub use error::ClientError;
pub use utils::{js_error_message, set_panic_hook};

pub use puppy_bowl_protocol as protocol;
pub use puppy_bowl_protocol::{NewPlayer, Player, PlayerId, PlayerStatus, Team, TeamId};
