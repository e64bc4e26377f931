// ============================================================================
// APP - Controlador: posee estado + view model y re-renderiza regiones
// ============================================================================
// Flujo: evento DOM → Intent → DashboardViewModel::dispatch (async)
//        → regiones sucias → reemplazo completo de cada región.
// ============================================================================

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{
    append_child, document, focus_input, get_element_by_id, on_keydown, set_inner_html, take_listeners,
};
use crate::services::Platform;
use crate::state::DashboardState;
use crate::viewmodels::{DashboardViewModel, Intent, Region};
use crate::views::{
    region_id, render_layout, render_payments_table, render_sellers_panel, render_totem_modal,
    render_totems_table, render_user_info, TOTEM_POS_INPUT,
};

const ALL_REGIONS: [Region; 5] = [
    Region::UserInfo,
    Region::Totems,
    Region::Payments,
    Region::TotemModal,
    Region::Sellers,
];

thread_local! {
    // Closures de cada región; se sueltan al re-renderizarla
    static REGION_LISTENERS: RefCell<HashMap<Region, Vec<Box<dyn Any>>>> = RefCell::new(HashMap::new());
}

pub struct App {
    vm: Rc<DashboardViewModel>,
    root: Element,
    /// Listeners del layout y de document (viven lo mismo que App)
    _shell_listeners: Vec<Box<dyn Any>>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = Rc::new(RefCell::new(DashboardState::new(
            config.payments.per_page,
            config.features.clone(),
        )));
        let vm = DashboardViewModel::new(Platform::browser(config), config, state);

        Ok(Self {
            vm: Rc::new(vm),
            root,
            _shell_listeners: Vec::new(),
        })
    }

    /// Montar esqueleto + regiones iniciales y listeners globales (una sola vez)
    pub fn mount(&mut self) -> Result<(), JsValue> {
        let features = self.vm.state().borrow().features.clone();
        set_inner_html(&self.root, "");
        append_child(&self.root, &render_layout(&features)?)?;

        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        on_keydown(&doc, |e| {
            if e.key() == "Escape" {
                crate::dispatch(Intent::EscapePressed);
            }
        })?;
        self._shell_listeners = take_listeners();

        render_regions(&self.vm.state(), &ALL_REGIONS);

        log::info!("✅ [APP] Dashboard montado");
        Ok(())
    }

    /// Procesar un intent en segundo plano y re-renderizar lo que cambió
    pub fn dispatch(&self, intent: Intent) {
        let vm = self.vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let regions = vm.dispatch(intent).await;
            render_regions(&vm.state(), &regions);
        });
    }
}

fn render_regions(state: &Rc<RefCell<DashboardState>>, regions: &[Region]) {
    for region in regions {
        if let Err(e) = render_region(state, *region) {
            log::error!("❌ [APP] Error renderizando {:?}: {:?}", region, e);
        }
    }
}

fn render_region(state: &Rc<RefCell<DashboardState>>, region: Region) -> Result<(), JsValue> {
    // Regiones desactivadas por feature flag no existen en el layout
    let Some(container) = get_element_by_id(region_id(region)) else {
        return Ok(());
    };

    // Restos de un render fallido a medias
    drop(take_listeners());

    let content = {
        let state = state.borrow();
        match region {
            Region::UserInfo => Some(render_user_info(&state.session)?),
            Region::Totems => Some(render_totems_table(&state.totems)?),
            Region::Payments => Some(render_payments_table(&state.payments)?),
            Region::TotemModal => render_totem_modal(&state.modal)?,
            Region::Sellers => render_sellers_panel(&state)?,
        }
    };

    set_inner_html(&container, "");
    if let Some(content) = content {
        append_child(&container, &content)?;
        if region == Region::TotemModal {
            focus_input(TOTEM_POS_INPUT);
        }
    }

    // Los nodos viejos ya no están en el DOM: sus closures pueden soltarse
    let fresh = take_listeners();
    let stale = REGION_LISTENERS.with(|map| map.borrow_mut().insert(region, fresh));
    drop(stale);
    Ok(())
}
