use crate::api::PicsumClient;
use crate::config::Config;
use crate::gallery::{GalleryHandle, GalleryStore};
use crate::ui::app::App;
use crate::ui::events::{forward_gallery_updates, AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Runtime;

const TICK_RATE: Duration = Duration::from_millis(250);
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Run the interactive gallery until the user quits.
///
/// The store lives on a worker task inside `runtime`; this thread only
/// draws snapshots and turns keys into commands.
pub fn run(runtime: &Runtime, config: &Config, start_page: u32) -> anyhow::Result<()> {
    let client = PicsumClient::new(&config.api)?;
    let store = GalleryStore::new(client, config.pagination);

    let enter_guard = runtime.enter();
    let gallery = GalleryHandle::spawn(store);

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config.pagination);
    let events = EventHandler::new(TICK_RATE);
    let forwarder = forward_gallery_updates(gallery.subscribe(), events.sender());

    app.attach_commands(gallery.sender());
    app.request_page(start_page);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::GalleryUpdated(state)) => app.on_gallery_update(state),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    forwarder.abort();
    drop(app);
    drop(enter_guard);
    // An in-flight fetch is not cancelled; give it a moment, then exit anyway
    if runtime
        .block_on(tokio::time::timeout(SHUTDOWN_GRACE, gallery.shutdown()))
        .is_err()
    {
        tracing::debug!("Gallery worker still busy at exit");
    }
    Ok(())
}
