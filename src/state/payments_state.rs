// ============================================================================
// PAYMENTS STATE - Cursor de paginación + filtros de fecha
// ============================================================================
// No hay total en el backend: "siguiente" se habilita solo si la última
// página vino llena (items.len() == per_page).
// ============================================================================

use crate::models::Payment;
use crate::services::api_client::PaymentsQuery;

/// Rango de fechas `YYYY-MM-DD` (inputs type=date)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    /// Inputs vacíos → sin filtro
    pub fn from_inputs(start: &str, end: &str) -> Self {
        fn non_blank(v: &str) -> Option<String> {
            let v = v.trim();
            if v.is_empty() { None } else { Some(v.to_string()) }
        }
        Self {
            start: non_blank(start),
            end: non_blank(end),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentsCursor {
    pub items: Vec<Payment>,
    /// Siempre >= 1
    pub current_page: u32,
    pub per_page: u32,
    /// Filtros aplicados a la última consulta
    pub filters: DateRange,
    /// Valores actuales de los inputs de fecha
    pub filter_inputs: DateRange,
    /// false hasta la primera página recibida (se muestra skeleton)
    pub loaded: bool,
}

impl PaymentsCursor {
    pub fn new(per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            per_page: per_page.max(1),
            filters: DateRange::default(),
            filter_inputs: DateRange::default(),
            loaded: false,
        }
    }

    /// Query para `page`. Si `keep_filters` es false, los inputs pasan a ser los filtros activos.
    pub fn query_for(&mut self, page: u32, keep_filters: bool) -> PaymentsQuery {
        if !keep_filters {
            self.filters = self.filter_inputs.clone();
        }
        let page = page.max(1);
        PaymentsQuery {
            skip: (page - 1) * self.per_page,
            limit: self.per_page,
            start_date: self.filters.start.clone(),
            end_date: self.filters.end.clone(),
        }
    }

    /// Reemplazo completo tras una respuesta exitosa
    pub fn apply_page(&mut self, page: u32, items: Vec<Payment>) {
        self.items = items;
        self.current_page = page.max(1);
        self.loaded = true;
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.items.len() >= self.per_page as usize
    }

    /// Rango 1-based mostrado ("1–10"); `None` sin items
    pub fn range(&self) -> Option<(u32, u32)> {
        if self.items.is_empty() {
            return None;
        }
        let from = (self.current_page - 1) * self.per_page + 1;
        let to = from + self.items.len() as u32 - 1;
        Some((from, to))
    }
}
