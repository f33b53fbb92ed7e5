use serde::{Deserialize, Serialize};

/// Состояние одной загружаемой коллекции
///
/// Каждая коллекция страницы владеет своим экземпляром, поэтому ошибка одной
/// загрузки не затрагивает данные соседних.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadState<T> {
    pub data: Vec<T>,
    pub loading: bool,
}

impl<T> LoadState<T> {
    /// Начальное состояние при монтировании страницы: пусто, идёт загрузка
    pub fn pending() -> Self {
        Self {
            data: Vec::new(),
            loading: true,
        }
    }

    /// Отметить начало загрузки, данные не трогаются
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Успех: коллекция заменяется целиком
    pub fn succeed(&mut self, data: Vec<T>) {
        self.data = data;
        self.loading = false;
    }

    /// Ошибка: прежние данные остаются как были
    pub fn fail(&mut self) {
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::pending()
    }
}
