// ============================================================================
// DASHBOARD VIEWMODEL - Función central de actualización
// ============================================================================
// Intent → llamadas al ApiClient → reemplazo del estado → regiones sucias.
// Nunca se mantiene un borrow del estado a través de un `.await`.
// Los errores del gateway ya mostraron su toast: aquí solo se registran.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::AppConfig;
use crate::models::{SellerCreate, TotemForm};
use crate::services::{ApiClient, Confirmer, Gateway, Navigator, Platform, ToastKind, ToastSink, TokenStore};
use crate::state::{DashboardState, DateRange, TokenField};
use crate::utils::constants::*;
use crate::viewmodels::intent::{Intent, Region};

pub struct DashboardViewModel {
    api: ApiClient,
    state: Rc<RefCell<DashboardState>>,
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    confirmer: Rc<dyn Confirmer>,
    toasts: Rc<dyn ToastSink>,
    login_path: String,
}

impl DashboardViewModel {
    pub fn new(platform: Platform, config: &AppConfig, state: Rc<RefCell<DashboardState>>) -> Self {
        let gateway = Gateway::new(
            platform.transport.clone(),
            platform.tokens.clone(),
            platform.navigator.clone(),
            platform.toasts.clone(),
            config.backend_url.clone(),
            config.login_path.clone(),
        );
        Self {
            api: ApiClient::new(Rc::new(gateway)),
            state,
            tokens: platform.tokens,
            navigator: platform.navigator,
            confirmer: platform.confirmer,
            toasts: platform.toasts,
            login_path: config.login_path.clone(),
        }
    }

    pub fn state(&self) -> Rc<RefCell<DashboardState>> {
        self.state.clone()
    }

    /// Procesa un intent y devuelve las regiones a re-renderizar
    pub async fn dispatch(&self, intent: Intent) -> Vec<Region> {
        log::debug!("🎯 [VM] {:?}", intent);
        let regions = match intent {
            Intent::Start => self.start().await,
            Intent::Logout => self.logout(),

            Intent::ConnectMercadoPago => self.connect_mercadopago().await,
            Intent::DisconnectMercadoPago => self.disconnect_mercadopago().await,
            Intent::ToggleTokenVisibility(field) => self.toggle_token(field),

            Intent::OpenCreateTotem => {
                self.state.borrow_mut().modal.open_create();
                vec![Region::TotemModal]
            }
            Intent::OpenEditTotem(id) => self.open_edit(id),
            Intent::CloseTotemModal | Intent::EscapePressed => self.close_modal(),
            Intent::SubmitTotemForm(form) => self.submit_totem(form).await,
            Intent::DeleteTotem(id) => self.delete_totem(id).await,

            Intent::PaymentsPrevPage => self.prev_page().await,
            Intent::PaymentsNextPage => self.next_page().await,
            Intent::PaymentsFilterChanged { start_date, end_date } => {
                self.state.borrow_mut().payments.filter_inputs = DateRange::from_inputs(&start_date, &end_date);
                // Cambiar un filtro siempre vuelve a la página 1
                self.load_payments(1, false).await
            }

            Intent::SubmitSellerForm(body) => self.submit_seller(body).await,
            Intent::DeleteSeller(id) => self.delete_seller(id).await,
        };
        dedup(regions)
    }

    // ------------------------------------------------------------------
    // Sesión
    // ------------------------------------------------------------------

    async fn start(&self) -> Vec<Region> {
        if self.tokens.token().is_none() {
            log::info!("🔒 [VM] Sin token, redirigiendo a login");
            self.navigator.redirect(&self.login_path);
            return Vec::new();
        }

        let mut regions = self.reload_user().await;
        if regions.is_empty() {
            log::error!("❌ [VM] Fallo crítico al cargar los datos iniciales");
            return regions;
        }

        let payments_enabled = self.state.borrow().features.payments;
        if payments_enabled {
            regions.extend(self.load_payments(1, false).await);
        }
        regions.extend(self.load_sellers().await);
        regions
    }

    fn logout(&self) -> Vec<Region> {
        log::info!("👋 [VM] Logout");
        self.tokens.clear();
        self.navigator.redirect(&self.login_path);
        Vec::new()
    }

    /// GET /sellers/me: reemplaza usuario y tótems (no hay endpoint de tótems propio)
    async fn reload_user(&self) -> Vec<Region> {
        match self.api.me().await {
            Ok(user) => {
                log::info!("✅ [VM] Usuario {} cargado con {} tótems", user.id, user.totems.len());
                self.state.borrow_mut().set_user(user);
                vec![Region::UserInfo, Region::Totems, Region::Sellers]
            }
            Err(e) => {
                log::error!("❌ [VM] Error cargando usuario: {}", e);
                Vec::new()
            }
        }
    }

    // ------------------------------------------------------------------
    // Mercado Pago
    // ------------------------------------------------------------------

    async fn connect_mercadopago(&self) -> Vec<Region> {
        match self.api.mercadopago_authorize_url().await {
            Ok(response) if !response.authorization_url.is_empty() => {
                log::info!("🔗 [VM] Redirigiendo a autorización de Mercado Pago");
                self.navigator.redirect(&response.authorization_url);
            }
            Ok(_) => log::warn!("⚠️ [VM] authorize-url sin authorization_url"),
            Err(e) => log::error!("❌ [VM] No se pudo obtener la URL de Mercado Pago: {}", e),
        }
        Vec::new()
    }

    async fn disconnect_mercadopago(&self) -> Vec<Region> {
        if !self.confirmer.confirm(CONFIRM_MP_DISCONNECT) {
            return Vec::new();
        }
        match self.api.mercadopago_disconnect().await {
            Ok(()) => {
                self.toasts.show(MSG_MP_DISCONNECTED, ToastKind::Success);
                // Optimista: no se vuelve a pedir el usuario
                self.state.borrow_mut().session.clear_mp_link();
                vec![Region::UserInfo]
            }
            Err(e) => {
                log::error!("❌ [VM] Error desconectando Mercado Pago: {}", e);
                Vec::new()
            }
        }
    }

    fn toggle_token(&self, field: TokenField) -> Vec<Region> {
        self.state.borrow_mut().session.toggle_reveal(field);
        vec![Region::UserInfo]
    }

    // ------------------------------------------------------------------
    // Tótems
    // ------------------------------------------------------------------

    fn open_edit(&self, id: i64) -> Vec<Region> {
        let mut state = self.state.borrow_mut();
        let Some(totem) = state.find_totem(id).cloned() else {
            log::warn!("⚠️ [VM] Tótem {} no está en la lista, ignorando edición", id);
            return Vec::new();
        };
        state.modal.open_edit(totem);
        vec![Region::TotemModal]
    }

    fn close_modal(&self) -> Vec<Region> {
        if self.state.borrow_mut().modal.close() {
            vec![Region::TotemModal]
        } else {
            Vec::new()
        }
    }

    async fn submit_totem(&self, form: TotemForm) -> Vec<Region> {
        let Some(owner_id) = self.state.borrow().session.user_id() else {
            log::warn!("⚠️ [VM] Submit de tótem sin usuario cargado, ignorando");
            return Vec::new();
        };
        let payload = form.to_payload(owner_id);

        let result = match form.identity() {
            Some(id) => self.api.update_totem(id, &payload).await.map(|_| MSG_TOTEM_UPDATED),
            None => self.api.create_totem(&payload).await.map(|_| MSG_TOTEM_CREATED),
        };

        match result {
            Ok(message) => {
                self.toasts.show(message, ToastKind::Success);
                self.state.borrow_mut().modal.close();
                let mut regions = vec![Region::TotemModal];
                regions.extend(self.reload_user().await);
                regions
            }
            Err(e) => {
                log::debug!("[VM] Submit de tótem falló: {}", e);
                Vec::new()
            }
        }
    }

    async fn delete_totem(&self, id: i64) -> Vec<Region> {
        if !self.confirmer.confirm(CONFIRM_DELETE_TOTEM) {
            return Vec::new();
        }
        match self.api.delete_totem(&id.to_string()).await {
            Ok(()) => {
                self.toasts.show(MSG_TOTEM_DELETED, ToastKind::Success);
                self.reload_user().await
            }
            Err(e) => {
                log::debug!("[VM] Eliminación de tótem {} falló: {}", id, e);
                Vec::new()
            }
        }
    }

    // ------------------------------------------------------------------
    // Pagos
    // ------------------------------------------------------------------

    /// skip = (page-1)*per_page. Con `keep_filters` false se releen los inputs de fecha.
    pub async fn load_payments(&self, page: u32, keep_filters: bool) -> Vec<Region> {
        let query = self.state.borrow_mut().payments.query_for(page, keep_filters);
        match self.api.list_payments(&query).await {
            Ok(items) => {
                log::info!("💳 [VM] Página {} de pagos: {} items", page, items.len());
                self.state.borrow_mut().payments.apply_page(page, items);
                vec![Region::Payments]
            }
            Err(e) => {
                log::error!("❌ [VM] Error al cargar los pagos: {}", e);
                Vec::new()
            }
        }
    }

    async fn prev_page(&self) -> Vec<Region> {
        let current = self.state.borrow().payments.current_page;
        if current <= 1 {
            return Vec::new();
        }
        self.load_payments(current - 1, true).await
    }

    async fn next_page(&self) -> Vec<Region> {
        let (current, can_go_next) = {
            let state = self.state.borrow();
            (state.payments.current_page, state.payments.can_go_next())
        };
        if !can_go_next {
            log::warn!("⚠️ [VM] Última página incompleta, no hay siguiente");
            return Vec::new();
        }
        self.load_payments(current + 1, true).await
    }

    // ------------------------------------------------------------------
    // Vendedores (admin)
    // ------------------------------------------------------------------

    async fn load_sellers(&self) -> Vec<Region> {
        if !self.state.borrow().show_admin_panel() {
            return Vec::new();
        }
        match self.api.list_sellers().await {
            Ok(sellers) => {
                log::info!("👥 [VM] {} vendedores cargados", sellers.len());
                self.state.borrow_mut().sellers = sellers;
                vec![Region::Sellers]
            }
            Err(e) => {
                log::error!("❌ [VM] Error cargando vendedores: {}", e);
                Vec::new()
            }
        }
    }

    async fn submit_seller(&self, body: SellerCreate) -> Vec<Region> {
        if !self.state.borrow().show_admin_panel() {
            log::warn!("⚠️ [VM] Alta de vendedor sin panel de admin, ignorando");
            return Vec::new();
        }
        match self.api.create_seller(&body).await {
            Ok(_) => {
                self.toasts.show(MSG_SELLER_CREATED, ToastKind::Success);
                self.load_sellers().await
            }
            Err(e) => {
                log::debug!("[VM] Alta de vendedor falló: {}", e);
                Vec::new()
            }
        }
    }

    async fn delete_seller(&self, id: i64) -> Vec<Region> {
        {
            let state = self.state.borrow();
            if !state.show_admin_panel() {
                log::warn!("⚠️ [VM] Baja de vendedor sin panel de admin, ignorando");
                return Vec::new();
            }
            if state.session.user_id() == Some(id) {
                log::warn!("⚠️ [VM] Un admin no puede eliminarse a sí mismo");
                return Vec::new();
            }
        }
        if !self.confirmer.confirm(CONFIRM_DELETE_SELLER) {
            return Vec::new();
        }
        match self.api.delete_seller(id).await {
            Ok(()) => {
                self.toasts.show(MSG_SELLER_DELETED, ToastKind::Success);
                self.load_sellers().await
            }
            Err(e) => {
                log::debug!("[VM] Baja de vendedor {} falló: {}", id, e);
                Vec::new()
            }
        }
    }
}

fn dedup(regions: Vec<Region>) -> Vec<Region> {
    let mut out = Vec::with_capacity(regions.len());
    for region in regions {
        if !out.contains(&region) {
            out.push(region);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::config::FeatureFlags;
    use crate::services::HttpMethod;
    use crate::state::TotemModal;
    use crate::test_support::{payments_json, seller_json, FakePlatform, FakeTransport};

    struct Harness {
        vm: DashboardViewModel,
        transport: Rc<FakeTransport>,
        platform: FakePlatform,
    }

    fn harness(features: FeatureFlags) -> Harness {
        let transport = Rc::new(FakeTransport::new());
        let platform = FakePlatform::with_token("tok");
        let config = AppConfig { features: features.clone(), ..AppConfig::default() };
        let state = Rc::new(RefCell::new(DashboardState::new(config.payments.per_page, features)));
        let vm = DashboardViewModel::new(
            Platform {
                transport: transport.clone(),
                tokens: platform.tokens.clone(),
                navigator: platform.navigator.clone(),
                confirmer: platform.confirmer.clone(),
                toasts: platform.toasts.clone(),
            },
            &config,
            state,
        );
        Harness { vm, transport, platform }
    }

    fn started(role: &str, totems: &[(i64, &str)]) -> Harness {
        let h = harness(FeatureFlags::default());
        h.transport.route(HttpMethod::Get, "/sellers/me", 200, &seller_json(42, role, totems));
        h.transport.route(HttpMethod::Get, "/api/v1/payments/me", 200, &payments_json(0));
        h.transport.route(HttpMethod::Get, "/sellers/", 200, "[]");
        block_on(h.vm.dispatch(Intent::Start));
        h
    }

    fn form(id: &str) -> TotemForm {
        TotemForm {
            id: id.to_string(),
            external_pos_id: "POS-1".to_string(),
            location: "Store A".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_start_sin_token_redirige() {
        let h = harness(FeatureFlags::default());
        h.platform.tokens.clear();
        let regions = block_on(h.vm.dispatch(Intent::Start));
        assert!(regions.is_empty());
        assert_eq!(h.platform.navigator.redirects(), vec!["/".to_string()]);
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_start_carga_usuario_totems_y_pagos() {
        let h = started("seller", &[(1, "POS-1"), (2, "POS-2")]);
        let state = h.vm.state();
        let state = state.borrow();
        assert_eq!(state.session.user_id(), Some(42));
        assert_eq!(state.totems.len(), 2);
        assert!(state.payments.loaded);
        assert_eq!(
            h.transport.calls(),
            vec![
                (HttpMethod::Get, "/sellers/me".to_string()),
                (HttpMethod::Get, "/api/v1/payments/me?skip=0&limit=10".to_string()),
            ]
        );
    }

    #[test]
    fn test_start_admin_carga_vendedores() {
        let h = started("admin", &[]);
        assert!(h.vm.state().borrow().show_admin_panel());
        assert!(h.transport.calls().contains(&(HttpMethod::Get, "/sellers/".to_string())));
    }

    #[test]
    fn test_start_sin_pagos_no_consulta_pagos() {
        let h = harness(FeatureFlags { admin_panel: false, payments: false });
        h.transport.route(HttpMethod::Get, "/sellers/me", 200, &seller_json(1, "admin", &[]));
        let regions = block_on(h.vm.dispatch(Intent::Start));
        assert!(!regions.contains(&Region::Payments));
        assert_eq!(h.transport.calls().len(), 1);
    }

    #[test]
    fn test_crear_totem_sin_id_hace_post_con_owner() {
        let h = started("seller", &[]);
        h.vm.state().borrow_mut().modal.open_create();
        h.transport.route(HttpMethod::Post, "/totems/", 200, r#"{"id": 9, "external_pos_id": "POS-1", "location": "Store A", "is_active": true, "owner_id": 42}"#);
        h.transport.route(HttpMethod::Get, "/sellers/me", 200, &seller_json(42, "seller", &[(9, "POS-1")]));

        let regions = block_on(h.vm.dispatch(Intent::SubmitTotemForm(form(""))));

        let post = h
            .transport
            .requests()
            .into_iter()
            .find(|r| r.method == HttpMethod::Post)
            .unwrap();
        assert_eq!(post.url, "/totems/");
        let body: serde_json::Value = serde_json::from_str(post.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["owner_id"], 42);
        assert_eq!(body["external_pos_id"], "POS-1");
        assert_eq!(body["location"], "Store A");
        assert_eq!(body["is_active"], true);

        let state = h.vm.state();
        assert_eq!(state.borrow().modal, TotemModal::Closed);
        assert_eq!(state.borrow().totems.len(), 1);
        assert!(regions.contains(&Region::TotemModal));
        assert!(regions.contains(&Region::Totems));
        assert_eq!(
            h.platform.toasts.messages(),
            vec![(MSG_TOTEM_CREATED.to_string(), ToastKind::Success)]
        );
        // recarga de /sellers/me después del POST
        let calls = h.transport.calls();
        assert_eq!(calls.last(), Some(&(HttpMethod::Get, "/sellers/me".to_string())));
    }

    #[test]
    fn test_editar_totem_con_id_hace_patch() {
        let h = started("seller", &[(7, "POS-7")]);
        block_on(h.vm.dispatch(Intent::OpenEditTotem(7)));
        assert!(matches!(h.vm.state().borrow().modal, TotemModal::Edit(_)));
        h.transport.route(HttpMethod::Patch, "/totems/7", 200, r#"{"id": 7, "external_pos_id": "POS-1", "is_active": true, "owner_id": 42}"#);

        block_on(h.vm.dispatch(Intent::SubmitTotemForm(form("7"))));

        assert!(h.transport.calls().contains(&(HttpMethod::Patch, "/totems/7".to_string())));
        assert!(!h.transport.calls().iter().any(|(m, _)| *m == HttpMethod::Post));
        assert_eq!(h.vm.state().borrow().modal, TotemModal::Closed);
        assert_eq!(h.platform.toasts.messages()[0].0, MSG_TOTEM_UPDATED);
    }

    #[test]
    fn test_submit_fallido_mantiene_modal_y_un_solo_toast() {
        let h = started("seller", &[]);
        h.vm.state().borrow_mut().modal.open_create();
        h.transport.route(HttpMethod::Post, "/totems/", 422, r#"{"detail": "POS duplicado"}"#);

        let regions = block_on(h.vm.dispatch(Intent::SubmitTotemForm(form(""))));

        assert!(regions.is_empty());
        assert!(h.vm.state().borrow().modal.is_open());
        assert_eq!(
            h.platform.toasts.messages(),
            vec![("POS duplicado".to_string(), ToastKind::Error)]
        );
    }

    #[test]
    fn test_submit_sin_usuario_se_ignora() {
        let h = harness(FeatureFlags::default());
        let regions = block_on(h.vm.dispatch(Intent::SubmitTotemForm(form(""))));
        assert!(regions.is_empty());
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_eliminar_requiere_confirmacion() {
        let h = started("seller", &[(3, "POS-3")]);
        h.platform.confirmer.answer(false);
        block_on(h.vm.dispatch(Intent::DeleteTotem(3)));
        assert!(!h.transport.calls().iter().any(|(m, _)| *m == HttpMethod::Delete));
        assert_eq!(h.platform.confirmer.asked(), vec![CONFIRM_DELETE_TOTEM.to_string()]);

        h.platform.confirmer.answer(true);
        h.transport.route(HttpMethod::Delete, "/totems/3", 200, "{}");
        h.transport.route(HttpMethod::Get, "/sellers/me", 200, &seller_json(42, "seller", &[]));
        let regions = block_on(h.vm.dispatch(Intent::DeleteTotem(3)));
        assert!(h.transport.calls().contains(&(HttpMethod::Delete, "/totems/3".to_string())));
        assert!(regions.contains(&Region::Totems));
        assert!(h.vm.state().borrow().totems.is_empty());
        assert_eq!(h.platform.toasts.messages()[0].0, MSG_TOTEM_DELETED);
    }

    #[test]
    fn test_escape_solo_cierra_si_esta_abierto() {
        let h = harness(FeatureFlags::default());
        assert!(block_on(h.vm.dispatch(Intent::EscapePressed)).is_empty());
        block_on(h.vm.dispatch(Intent::OpenCreateTotem));
        assert_eq!(block_on(h.vm.dispatch(Intent::EscapePressed)), vec![Region::TotemModal]);
        assert!(!h.vm.state().borrow().modal.is_open());
    }

    #[test]
    fn test_editar_totem_inexistente_no_abre_modal() {
        let h = started("seller", &[(1, "POS-1")]);
        assert!(block_on(h.vm.dispatch(Intent::OpenEditTotem(99))).is_empty());
        assert!(!h.vm.state().borrow().modal.is_open());
    }

    #[test]
    fn test_cambio_de_filtro_vuelve_a_pagina_1() {
        let h = started("seller", &[]);
        h.transport.route(HttpMethod::Get, "/api/v1/payments/me", 200, &payments_json(10));
        block_on(h.vm.load_payments(3, true));
        assert_eq!(h.vm.state().borrow().payments.current_page, 3);

        block_on(h.vm.dispatch(Intent::PaymentsFilterChanged {
            start_date: "2024-05-01".to_string(),
            end_date: String::new(),
        }));

        assert_eq!(h.vm.state().borrow().payments.current_page, 1);
        let (_, url) = h.transport.calls().last().cloned().unwrap();
        assert_eq!(url, "/api/v1/payments/me?skip=0&limit=10&start_date=2024-05-01");
    }

    #[test]
    fn test_navegacion_conserva_filtros() {
        let h = started("seller", &[]);
        h.transport.route(HttpMethod::Get, "/api/v1/payments/me", 200, &payments_json(10));
        block_on(h.vm.dispatch(Intent::PaymentsFilterChanged {
            start_date: "2024-05-01".to_string(),
            end_date: "2024-05-31".to_string(),
        }));
        block_on(h.vm.dispatch(Intent::PaymentsNextPage));

        let (_, url) = h.transport.calls().last().cloned().unwrap();
        assert_eq!(
            url,
            "/api/v1/payments/me?skip=10&limit=10&start_date=2024-05-01&end_date=2024-05-31"
        );
        assert_eq!(h.vm.state().borrow().payments.current_page, 2);

        block_on(h.vm.dispatch(Intent::PaymentsPrevPage));
        assert_eq!(h.vm.state().borrow().payments.current_page, 1);
    }

    #[test]
    fn test_prev_en_pagina_1_no_hace_nada() {
        let h = started("seller", &[]);
        let before = h.transport.requests().len();
        assert!(block_on(h.vm.dispatch(Intent::PaymentsPrevPage)).is_empty());
        assert_eq!(h.transport.requests().len(), before);
    }

    #[test]
    fn test_error_de_pagos_no_cambia_pagina() {
        let h = started("seller", &[]);
        h.transport.route(HttpMethod::Get, "/api/v1/payments/me", 500, r#"{"detail": "boom"}"#);
        let regions = block_on(h.vm.load_payments(2, true));
        assert!(regions.is_empty());
        assert_eq!(h.vm.state().borrow().payments.current_page, 1);
        assert_eq!(h.platform.toasts.errors(), 1);
    }

    #[test]
    fn test_pago_con_monto_nulo_no_oculta_la_pagina() {
        let h = started("seller", &[]);
        h.transport.route(
            HttpMethod::Get,
            "/api/v1/payments/me",
            200,
            r#"[{"payment_time": "2024-05-01T12:00:00", "amount": "10.00", "status": "approved"},
                {"payment_time": "2024-05-01T12:05:00", "amount": null, "status": "approved"}]"#,
        );
        let regions = block_on(h.vm.load_payments(1, false));
        assert_eq!(regions, vec![Region::Payments]);
        assert_eq!(h.vm.state().borrow().payments.items.len(), 2);
        assert_eq!(h.platform.toasts.errors(), 0);
    }

    #[test]
    fn test_401_en_cualquier_llamada_sin_toast() {
        let h = started("seller", &[(1, "POS-1")]);
        h.transport.route(HttpMethod::Delete, "/totems/1", 401, "{}");
        let regions = block_on(h.vm.dispatch(Intent::DeleteTotem(1)));
        assert!(regions.is_empty());
        assert!(h.platform.toasts.messages().is_empty());
        assert_eq!(h.platform.tokens.token(), None);
        assert_eq!(h.platform.navigator.redirects(), vec!["/".to_string()]);
    }

    #[test]
    fn test_conectar_mercadopago_redirige() {
        let h = started("seller", &[]);
        h.transport.route(
            HttpMethod::Get,
            "/mercadopago/authorize-url",
            200,
            r#"{"authorization_url": "https://auth.mercadopago.com/authorization?x=1"}"#,
        );
        block_on(h.vm.dispatch(Intent::ConnectMercadoPago));
        assert_eq!(
            h.platform.navigator.redirects(),
            vec!["https://auth.mercadopago.com/authorization?x=1".to_string()]
        );
    }

    #[test]
    fn test_desconectar_mercadopago_limpia_tokens() {
        let h = started("seller", &[]);
        {
            let state = h.vm.state();
            let mut state = state.borrow_mut();
            if let Some(user) = state.session.user.as_mut() {
                user.mp_access_token = Some("APP_USR".to_string());
            }
            state.session.reveal_access_token = true;
        }
        h.transport.route(HttpMethod::Get, "/mercadopago/disconnect", 200, r#"{"message": "ok"}"#);

        let regions = block_on(h.vm.dispatch(Intent::DisconnectMercadoPago));

        assert_eq!(regions, vec![Region::UserInfo]);
        let state = h.vm.state();
        let state = state.borrow();
        assert!(!state.session.user.as_ref().unwrap().is_mp_connected());
        assert!(!state.session.reveal_access_token);
        assert_eq!(h.platform.toasts.messages()[0].0, MSG_MP_DISCONNECTED);
    }

    #[test]
    fn test_toggle_token() {
        let h = harness(FeatureFlags::default());
        block_on(h.vm.dispatch(Intent::ToggleTokenVisibility(TokenField::Refresh)));
        assert!(h.vm.state().borrow().session.reveal_refresh_token);
        assert!(!h.vm.state().borrow().session.reveal_access_token);
    }

    #[test]
    fn test_logout_borra_token() {
        let h = harness(FeatureFlags::default());
        block_on(h.vm.dispatch(Intent::Logout));
        assert_eq!(h.platform.tokens.token(), None);
        assert_eq!(h.platform.navigator.redirects(), vec!["/".to_string()]);
    }

    #[test]
    fn test_admin_crea_vendedor_y_recarga_lista() {
        let h = started("admin", &[]);
        h.transport.route(HttpMethod::Post, "/sellers/", 200, r#"{"id": 50, "name": "Nuevo", "email": "n@x.com"}"#);
        h.transport.route(HttpMethod::Get, "/sellers/", 200, r#"[{"id": 42, "name": "Ana", "email": "ana@example.com", "role": "admin"}, {"id": 50, "name": "Nuevo", "email": "n@x.com"}]"#);

        let regions = block_on(h.vm.dispatch(Intent::SubmitSellerForm(SellerCreate {
            name: "Nuevo".to_string(),
            email: "n@x.com".to_string(),
            password: "secreta".to_string(),
        })));

        assert_eq!(regions, vec![Region::Sellers]);
        assert_eq!(h.vm.state().borrow().sellers.len(), 2);
        assert_eq!(h.platform.toasts.messages()[0].0, MSG_SELLER_CREATED);
    }

    #[test]
    fn test_vendedor_normal_no_administra() {
        let h = started("seller", &[]);
        let regions = block_on(h.vm.dispatch(Intent::DeleteSeller(5)));
        assert!(regions.is_empty());
        assert!(!h.transport.calls().iter().any(|(m, _)| *m == HttpMethod::Delete));
    }

    #[test]
    fn test_admin_no_puede_eliminarse_a_si_mismo() {
        let h = started("admin", &[]);
        let regions = block_on(h.vm.dispatch(Intent::DeleteSeller(42)));
        assert!(regions.is_empty());
        assert!(h.platform.confirmer.asked().is_empty());
    }
}
