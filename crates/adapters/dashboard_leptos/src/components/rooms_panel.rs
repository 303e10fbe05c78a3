//! Room creation form and rooms list.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rnr_domain::room::{NewRoom, RoomSummary};

use super::{DebugConsole, input_value};
use crate::api;
use crate::debug_log::{self, ROOMS_CONSOLE};
use crate::report::{self, AddRoomOutcome, RoomsOutcome};

/// Fetch the listing and replace the displayed rooms with it.
///
/// Overlapping calls are not de-duplicated: each replaces the whole list, so
/// the last response to arrive is what stays on screen.
fn refresh_rooms_list(rooms: RwSignal<RoomSummary>) {
    spawn_local(async move {
        let outcome = RoomsOutcome::from_result(api::fetch_rooms().await);
        let log = outcome.log.clone();
        rooms.update(|displayed| outcome.apply(displayed));
        debug_log::append(ROOMS_CONSOLE, &log);
    });
}

/// Rooms page: add-room form, refreshable list, debug console.
#[component]
pub fn RoomsPanel() -> impl IntoView {
    let rooms = RwSignal::new(RoomSummary::default());

    let room_name = NodeRef::<html::Input>::new();
    let apple_host = NodeRef::<html::Input>::new();
    let apple_creds = NodeRef::<html::Input>::new();
    let hue_bridge_ip = NodeRef::<html::Input>::new();
    let hue_user = NodeRef::<html::Input>::new();
    let light_ids = NodeRef::<html::Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let room = NewRoom::builder()
            .room_name(&input_value(room_name))
            .apple_tv_host(&input_value(apple_host))
            .apple_tv_credentials(&input_value(apple_creds))
            .hue_bridge_ip(&input_value(hue_bridge_ip))
            .hue_user(&input_value(hue_user))
            .light_ids(&input_value(light_ids))
            .build();
        let room = match room {
            Ok(room) => room,
            Err(err) => {
                debug_log::append(ROOMS_CONSOLE, &report::invalid_input(&err));
                return;
            }
        };

        spawn_local(async move {
            let outcome = AddRoomOutcome::from_result(&api::add_room(&room).await);
            debug_log::append(ROOMS_CONSOLE, &outcome.log);
            if outcome.refresh {
                refresh_rooms_list(rooms);
            }
        });
    };

    refresh_rooms_list(rooms);

    view! {
        <section class="rooms-panel">
            <h1>"Manage Rooms"</h1>
            <form id="formAddRoom" on:submit=on_submit>
                <label>"Room name" <input id="roomName" type="text" node_ref=room_name/></label>
                <label>"Apple TV host" <input id="appleHost" type="text" node_ref=apple_host/></label>
                <label>
                    "Apple TV credentials"
                    <input id="appleCreds" type="text" node_ref=apple_creds/>
                </label>
                <label>
                    "Hue bridge IP"
                    <input id="hueBridgeIp" type="text" node_ref=hue_bridge_ip/>
                </label>
                <label>"Hue user" <input id="hueUser" type="text" node_ref=hue_user/></label>
                <label>
                    "Light IDs (comma-separated)"
                    <input id="lightIds" type="text" placeholder="1, 2, 3" node_ref=light_ids/>
                </label>
                <button type="submit">"Add Room"</button>
            </form>

            <h2>"Rooms"</h2>
            <button id="refreshRoomsBtn" type="button" on:click=move |_| refresh_rooms_list(rooms)>
                "Refresh"
            </button>
            <ul id="roomsList" class="list-group">
                {move || {
                    rooms
                        .with(RoomSummary::lines)
                        .into_iter()
                        .map(|line| {
                            view! {
                                <li class="list-group-item d-flex justify-content-between align-items-center">
                                    {line}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <DebugConsole selector=ROOMS_CONSOLE/>
        </section>
    }
}
