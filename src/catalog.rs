use crate::models::{
    Booking, CustomerProfile, ServiceCategory, ServiceItem, SubCategory, WorkerDetail,
};

pub trait Record {
    fn id(&self) -> &str;

    fn parent_id(&self) -> Option<&str> {
        None
    }
}

pub trait Repository<T>: Send + Sync {
    fn find_by_id(&self, id: &str) -> Option<&T>;
    fn list_by_parent(&self, parent_id: &str) -> Vec<&T>;
    fn list_all(&self) -> Vec<&T>;
}

pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: Record + Send + Sync> Repository<T> for InMemoryRepository<T> {
    fn find_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn list_by_parent(&self, parent_id: &str) -> Vec<&T> {
        self.records
            .iter()
            .filter(|record| record.parent_id() == Some(parent_id))
            .collect()
    }

    fn list_all(&self) -> Vec<&T> {
        self.records.iter().collect()
    }
}

impl Record for ServiceCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for SubCategory {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.category_id)
    }
}

impl Record for ServiceItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.sub_category_id)
    }
}

impl Record for WorkerDetail {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.category_id)
    }
}

impl Record for Booking {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.customer_id)
    }
}

impl Record for CustomerProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct Catalog {
    pub categories: Box<dyn Repository<ServiceCategory>>,
    pub sub_categories: Box<dyn Repository<SubCategory>>,
    pub services: Box<dyn Repository<ServiceItem>>,
    pub workers: Box<dyn Repository<WorkerDetail>>,
    pub bookings: Box<dyn Repository<Booking>>,
    pub customers: Box<dyn Repository<CustomerProfile>>,
    current_customer_id: String,
    current_worker_id: String,
}

impl Catalog {
    pub fn in_memory() -> Self {
        Self {
            categories: Box::new(InMemoryRepository::new(crate::seed::categories())),
            sub_categories: Box::new(InMemoryRepository::new(crate::seed::sub_categories())),
            services: Box::new(InMemoryRepository::new(crate::seed::services())),
            workers: Box::new(InMemoryRepository::new(crate::seed::workers())),
            bookings: Box::new(InMemoryRepository::new(crate::seed::bookings())),
            customers: Box::new(InMemoryRepository::new(crate::seed::customers())),
            current_customer_id: crate::seed::CURRENT_CUSTOMER_ID.to_string(),
            current_worker_id: crate::seed::CURRENT_WORKER_ID.to_string(),
        }
    }

    pub fn current_customer_id(&self) -> &str {
        &self.current_customer_id
    }

    pub fn current_customer(&self) -> Option<&CustomerProfile> {
        self.customers.find_by_id(&self.current_customer_id)
    }

    pub fn current_worker(&self) -> Option<&WorkerDetail> {
        self.workers.find_by_id(&self.current_worker_id)
    }

    pub fn category_of_service(&self, service: &ServiceItem) -> Option<&ServiceCategory> {
        self.sub_categories
            .find_by_id(&service.sub_category_id)
            .and_then(|sub| self.categories.find_by_id(&sub.category_id))
    }

    /// Workers listing the service on their profile, best rated first.
    pub fn workers_for_service(&self, service_id: &str) -> Vec<&WorkerDetail> {
        let mut workers: Vec<&WorkerDetail> = self
            .workers
            .list_all()
            .into_iter()
            .filter(|worker| worker.services.iter().any(|s| s.service_id == service_id))
            .collect();
        workers.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        workers
    }

    pub fn featured_workers(&self, limit: usize) -> Vec<&WorkerDetail> {
        let mut workers = self.workers.list_all();
        workers.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        workers.truncate(limit);
        workers
    }

    pub fn bookings_for_worker(&self, worker_id: &str) -> Vec<&Booking> {
        self.bookings
            .list_all()
            .into_iter()
            .filter(|booking| booking.worker_id == worker_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_ids_resolve_to_none() {
        let catalog = Catalog::in_memory();
        assert!(catalog.workers.find_by_id("w-404").is_none());
        assert!(catalog.services.find_by_id("").is_none());
        assert!(catalog.categories.find_by_id("gardening").is_none());
        assert!(catalog.sub_categories.list_by_parent("gardening").is_empty());
    }

    #[test]
    fn children_follow_their_parent() {
        let catalog = Catalog::in_memory();
        for category in catalog.categories.list_all() {
            let subs = catalog.sub_categories.list_by_parent(&category.id);
            assert!(!subs.is_empty(), "{} has no sub-categories", category.id);
            for sub in subs {
                assert_eq!(sub.category_id, category.id);
                for service in catalog.services.list_by_parent(&sub.id) {
                    assert_eq!(
                        catalog.category_of_service(service).map(|c| c.id.as_str()),
                        Some(category.id.as_str())
                    );
                }
            }
        }
    }

    #[test]
    fn worker_services_reference_known_services() {
        let catalog = Catalog::in_memory();
        for worker in catalog.workers.list_all() {
            assert!(catalog.categories.find_by_id(&worker.category_id).is_some());
            for service in &worker.services {
                assert!(
                    catalog.services.find_by_id(&service.service_id).is_some(),
                    "{} offers unknown {}",
                    worker.id,
                    service.service_id
                );
            }
            for review in &worker.reviews {
                assert!(review.rating <= 5);
            }
        }
    }

    #[test]
    fn workers_for_service_sorted_by_rating() {
        let catalog = Catalog::in_memory();
        let workers = catalog.workers_for_service("s-tap-repair");
        assert!(!workers.is_empty());
        assert!(workers.windows(2).all(|pair| pair[0].rating >= pair[1].rating));
        assert!(catalog.workers_for_service("s-unknown").is_empty());
    }

    #[test]
    fn current_profiles_exist() {
        let catalog = Catalog::in_memory();
        let customer = catalog.current_customer().expect("seeded customer");
        assert!(!catalog.bookings.list_by_parent(&customer.id).is_empty());
        let worker = catalog.current_worker().expect("seeded worker");
        assert!(!catalog.bookings_for_worker(&worker.id).is_empty());
    }

    #[test]
    fn featured_workers_respects_limit() {
        let catalog = Catalog::in_memory();
        assert_eq!(catalog.featured_workers(3).len(), 3);
    }
}
