use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::HomepageHostContext, preferences::load_preferences, reducer::HomepageAction};

pub(super) fn install_boot_hydration(
    host: HomepageHostContext,
    dispatch: Callback<HomepageAction>,
) {
    create_effect(move |_| {
        dispatch.call(HomepageAction::ResetGuestbook);

        let prefs = host.prefs_store();
        let strategy = host.host_strategy_name();
        spawn_local(async move {
            let preferences = load_preferences(prefs.as_ref()).await;
            logging::log!(
                "restored preferences from {strategy} host: night_mode={} music_playing={}",
                preferences.night_mode,
                preferences.music_playing
            );
            dispatch.call(HomepageAction::HydratePreferences { preferences });
        });
    });
}
