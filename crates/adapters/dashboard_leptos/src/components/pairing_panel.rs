//! Apple TV pairing: start the handshake, then submit the PIN.
//!
//! The two forms are independent; nothing enforces that pairing was started
//! before a PIN is sent.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rnr_domain::pairing::{PairingProtocol, StartPairing, SubmitPin};

use super::{DebugConsole, input_value};
use crate::api;
use crate::debug_log::{self, PAIRING_CONSOLE};
use crate::report;

/// Pairing page: start-pairing form, PIN form, shared debug console.
#[component]
pub fn PairingPanel() -> impl IntoView {
    let pair_room_name = NodeRef::<html::Input>::new();
    let pair_host = NodeRef::<html::Input>::new();
    let protocol_type = NodeRef::<html::Select>::new();
    let pin_room_name = NodeRef::<html::Input>::new();
    let pin_code = NodeRef::<html::Input>::new();

    let on_start = move |ev: SubmitEvent| {
        ev.prevent_default();

        let protocol = protocol_type
            .get()
            .map_or_else(PairingProtocol::default, |el| {
                PairingProtocol::from_name(&el.value())
            });
        let request = StartPairing::new(
            &input_value(pair_room_name),
            &input_value(pair_host),
            protocol,
        );

        spawn_local(async move {
            let result = api::start_pairing(&request).await;
            debug_log::append(PAIRING_CONSOLE, &report::reply_line(&result));
        });
    };

    let on_send_pin = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = SubmitPin::new(&input_value(pin_room_name), &input_value(pin_code));

        spawn_local(async move {
            let result = api::send_pin(&request).await;
            debug_log::append(PAIRING_CONSOLE, &report::reply_line(&result));
        });
    };

    view! {
        <section class="pairing-panel">
            <h1>"Pair Apple TV"</h1>
            <form id="formStartPairing" on:submit=on_start>
                <label>"Room name" <input id="pairRoomName" type="text" node_ref=pair_room_name/></label>
                <label>"Apple TV host" <input id="pairHost" type="text" node_ref=pair_host/></label>
                <label>
                    "Protocol"
                    <select id="protocolType" node_ref=protocol_type>
                        {PairingProtocol::ALL
                            .into_iter()
                            .map(|protocol| {
                                view! { <option value={protocol.as_str()}>{protocol.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit">"Start Pairing"</button>
            </form>

            <form id="formSendPin" on:submit=on_send_pin>
                <label>"Room name" <input id="pinRoomName" type="text" node_ref=pin_room_name/></label>
                <label>"PIN" <input id="pinCode" type="text" inputmode="numeric" node_ref=pin_code/></label>
                <button type="submit">"Send PIN"</button>
            </form>

            <DebugConsole selector=PAIRING_CONSOLE/>
        </section>
    }
}
