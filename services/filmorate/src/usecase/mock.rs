//! In-memory store implementing every repository port, for use case tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use filmorate_domain::id::{FilmId, GenreId, MpaId, UserId};
use filmorate_domain::reference::Genre;

use crate::domain::catalog::{Catalog, seeded_catalog};
use crate::domain::repository::{
    FilmRepository, FriendRepository, LikeRepository, UserRepository,
};
use crate::domain::types::{Film, FilmDraft, User, UserDraft};
use crate::error::FilmorateError;

#[derive(Default)]
struct Tables {
    films: BTreeMap<FilmId, FilmDraft>,
    users: BTreeMap<UserId, User>,
    likes: BTreeSet<(FilmId, UserId)>,
    friends: BTreeSet<(UserId, UserId)>,
}

impl Tables {
    fn film(&self, catalog: &Catalog, id: FilmId, draft: &FilmDraft) -> Film {
        Film {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            release_date: draft.release_date,
            duration: draft.duration,
            rate: self.likes.iter().filter(|(f, _)| *f == id).count() as u64,
            genres: catalog.resolve_genres(&draft.genre_ids).unwrap(),
            mpa: catalog.mpa(draft.mpa_id).unwrap(),
        }
    }

    fn all_films(&self, catalog: &Catalog) -> Vec<Film> {
        self.films
            .iter()
            .map(|(id, draft)| self.film(catalog, *id, draft))
            .collect()
    }

    fn friends_of(&self, user_id: UserId) -> BTreeSet<UserId> {
        self.friends
            .iter()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, f)| *f)
            .collect()
    }

    fn users_in(&self, ids: &BTreeSet<UserId>) -> Vec<User> {
        ids.iter().filter_map(|id| self.users.get(id).cloned()).collect()
    }
}

#[derive(Clone)]
pub struct MockStore {
    pub catalog: Arc<Catalog>,
    tables: Arc<Mutex<Tables>>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(seeded_catalog()),
            tables: Arc::default(),
        }
    }

    /// Users `1..=n` with no films or relations.
    pub fn with_users(n: i32) -> Self {
        let store = Self::new();
        {
            let mut t = store.tables.lock().unwrap();
            for id in 1..=n {
                t.users.insert(
                    UserId(id),
                    User {
                        id: UserId(id),
                        email: format!("{id}@yandex.ru"),
                        login: format!("user{id}"),
                        name: format!("user{id}"),
                        birthday: date(1990, 1, id as u32),
                    },
                );
            }
        }
        store
    }

    /// Three films, three users, likes 1<-{2}, 2<-{1,2}, 3<-{1,2,3} and friends
    /// 1->2, 1->3, 2->3, 3->1.
    pub fn seeded() -> Self {
        let store = Self::with_users(3);
        {
            let mut t = store.tables.lock().unwrap();
            let films = [
                (1, date(1990, 9, 10), 150, 2, vec![1]),
                (2, date(2005, 12, 4), 120, 1, vec![4]),
                (3, date(2008, 10, 1), 180, 4, vec![2, 4, 6]),
            ];
            for (id, release_date, duration, mpa, genres) in films {
                t.films.insert(
                    FilmId(id),
                    FilmDraft {
                        id: Some(FilmId(id)),
                        name: format!("film{id}"),
                        description: String::new(),
                        release_date,
                        duration,
                        genre_ids: genres.into_iter().map(GenreId).collect(),
                        mpa_id: MpaId(mpa),
                    },
                );
            }
            for (film, user) in [(1, 2), (2, 1), (2, 2), (3, 1), (3, 2), (3, 3)] {
                t.likes.insert((FilmId(film), UserId(user)));
            }
            for (user, friend) in [(1, 2), (1, 3), (2, 3), (3, 1)] {
                t.friends.insert((UserId(user), UserId(friend)));
            }
        }
        store
    }

    pub fn films(&self) -> Vec<Film> {
        self.tables.lock().unwrap().all_films(&self.catalog)
    }

    pub fn likes_for(&self, film_id: FilmId) -> Vec<UserId> {
        let t = self.tables.lock().unwrap();
        t.likes
            .iter()
            .filter(|(f, _)| *f == film_id)
            .map(|(_, u)| *u)
            .collect()
    }
}

impl FilmRepository for MockStore {
    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, FilmorateError> {
        let t = self.tables.lock().unwrap();
        Ok(t.films.get(&id).map(|d| t.film(&self.catalog, id, d)))
    }

    async fn list(&self) -> Result<Vec<Film>, FilmorateError> {
        Ok(self.films())
    }

    async fn exists(&self, id: FilmId) -> Result<bool, FilmorateError> {
        Ok(self.tables.lock().unwrap().films.contains_key(&id))
    }

    async fn save(&self, draft: &FilmDraft) -> Result<Film, FilmorateError> {
        let mut t = self.tables.lock().unwrap();
        let id = match draft.id {
            Some(id) if t.films.contains_key(&id) => id,
            Some(id) => return Err(FilmorateError::FilmNotFound(id)),
            None => FilmId(t.films.keys().last().map_or(1, |id| id.0 + 1)),
        };
        let stored = FilmDraft {
            id: Some(id),
            ..draft.clone()
        };
        let film = t.film(&self.catalog, id, &stored);
        t.films.insert(id, stored);
        Ok(film)
    }

    async fn delete(&self, id: FilmId) -> Result<bool, FilmorateError> {
        let mut t = self.tables.lock().unwrap();
        t.likes.retain(|(f, _)| *f != id);
        Ok(t.films.remove(&id).is_some())
    }

    async fn genres_for_film(&self, id: FilmId) -> Result<BTreeSet<Genre>, FilmorateError> {
        let t = self.tables.lock().unwrap();
        match t.films.get(&id) {
            Some(draft) => self.catalog.resolve_genres(&draft.genre_ids),
            None => Ok(BTreeSet::new()),
        }
    }
}

impl UserRepository for MockStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, FilmorateError> {
        Ok(self.tables.lock().unwrap().users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, FilmorateError> {
        Ok(self.tables.lock().unwrap().users.values().cloned().collect())
    }

    async fn exists(&self, id: UserId) -> Result<bool, FilmorateError> {
        Ok(self.tables.lock().unwrap().users.contains_key(&id))
    }

    async fn save(&self, draft: &UserDraft) -> Result<User, FilmorateError> {
        let mut t = self.tables.lock().unwrap();
        let id = match draft.id {
            Some(id) if t.users.contains_key(&id) => id,
            Some(id) => return Err(FilmorateError::UserNotFound(id)),
            None => UserId(t.users.keys().last().map_or(1, |id| id.0 + 1)),
        };
        let user = User {
            id,
            email: draft.email.clone(),
            login: draft.login.clone(),
            name: draft.display_name().to_owned(),
            birthday: draft.birthday,
        };
        t.users.insert(id, user.clone());
        Ok(user)
    }
}

impl LikeRepository for MockStore {
    async fn add(&self, film_id: FilmId, user_id: UserId) -> Result<(), FilmorateError> {
        self.tables.lock().unwrap().likes.insert((film_id, user_id));
        Ok(())
    }

    async fn remove(&self, film_id: FilmId, user_id: UserId) -> Result<(), FilmorateError> {
        self.tables.lock().unwrap().likes.remove(&(film_id, user_id));
        Ok(())
    }

    async fn list_by_film(&self, film_id: FilmId) -> Result<Vec<UserId>, FilmorateError> {
        Ok(self.likes_for(film_id))
    }

    async fn top_films(&self, n: u64) -> Result<Vec<Film>, FilmorateError> {
        let mut films = self.films();
        films.sort_by(|a, b| b.rate.cmp(&a.rate).then(a.id.cmp(&b.id)));
        films.truncate(usize::try_from(n).unwrap_or(usize::MAX));
        Ok(films)
    }
}

impl FriendRepository for MockStore {
    async fn add(&self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError> {
        self.tables.lock().unwrap().friends.insert((user_id, friend_id));
        Ok(())
    }

    async fn remove(&self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError> {
        self.tables.lock().unwrap().friends.remove(&(user_id, friend_id));
        Ok(())
    }

    async fn list_friends(&self, user_id: UserId) -> Result<Vec<User>, FilmorateError> {
        let t = self.tables.lock().unwrap();
        Ok(t.users_in(&t.friends_of(user_id)))
    }

    async fn list_common(&self, a: UserId, b: UserId) -> Result<Vec<User>, FilmorateError> {
        let t = self.tables.lock().unwrap();
        let common: BTreeSet<UserId> = t
            .friends_of(a)
            .intersection(&t.friends_of(b))
            .copied()
            .collect();
        Ok(t.users_in(&common))
    }
}
