//! File-based user repository
//!
//! Users and admin grants live in separate files so the admin list can be
//! inspected on its own.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use ridefare_domain::repository::UserRepository;
use ridefare_types::{AdminGrant, Error, Result, User};

use super::{read_store, write_store};

pub struct FileUserRepository {
    users_path: PathBuf,
    admins_path: PathBuf,
    users: RefCell<HashMap<String, User>>,
    admins: RefCell<Vec<AdminGrant>>,
}

impl FileUserRepository {
    /// Create or load `users.json` and `admins.json` under `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let users_path = store_dir.join("users.json");
        let admins_path = store_dir.join("admins.json");
        let users = read_store(&users_path)?;
        let admins = read_store(&admins_path)?;

        Ok(Self {
            users_path,
            admins_path,
            users: RefCell::new(users),
            admins: RefCell::new(admins),
        })
    }
}

impl UserRepository for FileUserRepository {
    fn save(&self, user: &User) -> std::result::Result<(), Error> {
        self.users
            .borrow_mut()
            .insert(user.id.clone(), user.clone());
        write_store(&self.users_path, &*self.users.borrow())
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<User>, Error> {
        Ok(self.users.borrow().get(id).cloned())
    }

    fn find_by_email(&self, email: &str) -> std::result::Result<Option<User>, Error> {
        Ok(self
            .users
            .borrow()
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<User>, Error> {
        let mut users: Vec<_> = self.users.borrow().values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(users)
    }

    fn save_admin(&self, grant: &AdminGrant) -> std::result::Result<(), Error> {
        {
            let mut admins = self.admins.borrow_mut();
            match admins.iter_mut().find(|a| a.user_id == grant.user_id) {
                Some(existing) => *existing = grant.clone(),
                None => admins.push(grant.clone()),
            }
        }
        write_store(&self.admins_path, &*self.admins.borrow())
    }

    fn find_admins(&self) -> std::result::Result<Vec<AdminGrant>, Error> {
        Ok(self.admins.borrow().clone())
    }

    fn admin_count(&self) -> std::result::Result<usize, Error> {
        Ok(self.admins.borrow().len())
    }
}
