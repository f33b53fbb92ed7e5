use std::cell::RefCell;
use std::future::Future;
use std::rc::Weak;

use crate::shared::error::FetchError;
use crate::shared::load_state::LoadState;

/// Ячейка, в которой живёт состояние коллекции
///
/// Страница может быть размонтирована, пока запрос ещё в полёте. Поэтому запись
/// идёт только через `try_update`: `None` означает, что состояние уже
/// освобождено и писать некуда.
pub trait StateCell {
    type Item;

    fn try_update<R>(&self, f: impl FnOnce(&mut LoadState<Self::Item>) -> R) -> Option<R>;
}

impl<T> StateCell for Weak<RefCell<LoadState<T>>> {
    type Item = T;

    fn try_update<R>(&self, f: impl FnOnce(&mut LoadState<T>) -> R) -> Option<R> {
        let cell = self.upgrade()?;
        let mut state = cell.borrow_mut();
        Some(f(&mut state))
    }
}

/// Итог одного запуска загрузчика
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Коллекция заменена, внутри количество записей
    Loaded(usize),
    /// Запрос не удался, данные не изменились
    Failed,
    /// Владелец состояния исчез, ничего не записано
    Discarded,
}

/// Загрузчик одной коллекции
pub struct CollectionLoader<C> {
    collection: &'static str,
    cell: C,
}

impl<C: StateCell> CollectionLoader<C> {
    pub fn new(collection: &'static str, cell: C) -> Self {
        Self { collection, cell }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    /// Загрузить коллекцию и отразить ход загрузки в ячейке
    pub async fn load<F>(&self, fetch: F) -> LoadOutcome
    where
        F: Future<Output = Result<Vec<C::Item>, FetchError>>,
    {
        self.load_then(fetch, |_| {}).await
    }

    /// То же, что `load`, но после успешной записи вызывает `on_loaded`
    /// с новыми данными. Хук не должен обращаться к этой же ячейке.
    pub async fn load_then<F, H>(&self, fetch: F, on_loaded: H) -> LoadOutcome
    where
        F: Future<Output = Result<Vec<C::Item>, FetchError>>,
        H: FnOnce(&[C::Item]),
    {
        if self.cell.try_update(LoadState::begin).is_none() {
            log::debug!("{}: state dropped before load started", self.collection);
            return LoadOutcome::Discarded;
        }

        match fetch.await {
            Ok(data) => {
                let count = data.len();
                let stored = self.cell.try_update(move |state| {
                    state.succeed(data);
                    on_loaded(&state.data);
                });
                match stored {
                    Some(()) => {
                        log::debug!("{}: loaded {} items", self.collection, count);
                        LoadOutcome::Loaded(count)
                    }
                    None => LoadOutcome::Discarded,
                }
            }
            Err(e) => {
                log::error!("Error fetching {}: {}", self.collection, e);
                match self.cell.try_update(LoadState::fail) {
                    Some(()) => LoadOutcome::Failed,
                    None => LoadOutcome::Discarded,
                }
            }
        }
    }
}
