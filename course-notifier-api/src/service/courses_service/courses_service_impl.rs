use super::CoursesService;
use crate::{
    dto::{input, output},
    error::Error,
    event::{DomainEventPublisher, OperationEvent},
    repository::{AuthorsRepository, CourseData, CoursesRepository, TransactionManager},
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;
use notification_contract::{EntityType, OperationType};
use std::sync::Arc;

pub struct CoursesServiceImpl {
    transaction_manager: Arc<dyn TransactionManager>,
    courses_repository: Arc<dyn CoursesRepository>,
    authors_repository: Arc<dyn AuthorsRepository>,
    event_publisher: Arc<DomainEventPublisher>,
}

impl CoursesServiceImpl {
    pub fn new(
        transaction_manager: Arc<dyn TransactionManager>,
        courses_repository: Arc<dyn CoursesRepository>,
        authors_repository: Arc<dyn AuthorsRepository>,
        event_publisher: Arc<DomainEventPublisher>,
    ) -> Self {
        Self {
            transaction_manager,
            courses_repository,
            authors_repository,
            event_publisher,
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::CourseNotExist)
    }

    async fn validate_course(&self, course: input::Course) -> Result<CourseData, Error> {
        if course.title.trim().is_empty() {
            return Err(Error::Validation("title must not be blank"));
        }
        if course.duration < 0 {
            return Err(Error::Validation("duration must not be negative"));
        }

        let mut author_ids = Vec::with_capacity(course.author_ids.len());
        for author_id in &course.author_ids {
            let author_id = ObjectId::parse_str(author_id)
                .map_err(|_| Error::Validation("author not exist"))?;
            if !author_ids.contains(&author_id) {
                author_ids.push(author_id);
            }
        }

        if !author_ids.is_empty() {
            let existing = self.authors_repository.count_existing(&author_ids).await?;
            if existing != author_ids.len() as u64 {
                return Err(Error::Validation("author not exist"));
            }
        }

        Ok(CourseData {
            title: course.title,
            description: course.description,
            creation_date: course.creation_date,
            duration: course.duration,
            author_ids,
        })
    }
}

#[async_trait]
impl CoursesService for CoursesServiceImpl {
    async fn create_course(
        &self,
        user: &User,
        course: input::Course,
    ) -> Result<output::Course, Error> {
        tracing::info!("creating course");
        tracing::trace!(?course);

        let course = self.validate_course(course).await?;

        let mut transaction = self.transaction_manager.begin().await?;
        let course = self
            .courses_repository
            .insert(&mut transaction, course)
            .await?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::Course,
                OperationType::Created,
                course.id.to_hex(),
                course.title.clone(),
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!(id = %course.id, "created course");

        Ok(output::Course::from(course))
    }

    async fn update_course(
        &self,
        user: &User,
        id: &str,
        course: input::Course,
    ) -> Result<output::Course, Error> {
        tracing::info!(id, "updating course");
        tracing::trace!(?course);

        let id = Self::parse_id(id)?;
        let course = self.validate_course(course).await?;

        let mut transaction = self.transaction_manager.begin().await?;
        let course = self
            .courses_repository
            .update(&mut transaction, id, course)
            .await?
            .ok_or(Error::CourseNotExist)?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::Course,
                OperationType::Updated,
                course.id.to_hex(),
                course.title.clone(),
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!("updated course");

        Ok(output::Course::from(course))
    }

    async fn delete_course(&self, user: &User, id: &str) -> Result<(), Error> {
        tracing::info!(id, "deleting course");

        let id = Self::parse_id(id)?;

        let mut transaction = self.transaction_manager.begin().await?;
        let course = self
            .courses_repository
            .delete(&mut transaction, id)
            .await?
            .ok_or(Error::CourseNotExist)?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::Course,
                OperationType::Deleted,
                course.id.to_hex(),
                course.title,
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!("deleted course");

        Ok(())
    }

    async fn find_course(&self, id: &str) -> Result<output::Course, Error> {
        tracing::info!(id, "finding course");

        let id = Self::parse_id(id)?;
        let course = self
            .courses_repository
            .find(id)
            .await?
            .ok_or(Error::CourseNotExist)?;

        Ok(output::Course::from(course))
    }

    async fn find_courses(&self) -> Result<Vec<output::Course>, Error> {
        tracing::info!("finding courses");

        let courses = self.courses_repository.find_all().await?;
        tracing::info!(count = courses.len(), "found courses");

        let courses = courses.into_iter().map(output::Course::from).collect();

        Ok(courses)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        event::{MockOperationEventListener, OperationEventListener},
        repository::{
            self, Course, MockAuthorsRepository, MockCoursesRepository, MockTransactionManager,
            Transaction,
        },
        service::notification_relay::{MockNotificationPublisher, NotificationRelay},
    };
    use mongodb::error::ErrorKind;
    use rabbitmq_pubsub::PublishError;
    use uuid::Uuid;

    fn user() -> User {
        User::new(Uuid::new_v4(), Some("alice".to_string()), vec![])
    }

    fn input_course(author_ids: Vec<String>) -> input::Course {
        input::Course {
            title: "Intro".to_string(),
            description: "not important description".to_string(),
            creation_date: "2024-03-01".to_string(),
            duration: 90,
            author_ids,
        }
    }

    fn transaction_manager() -> MockTransactionManager {
        let mut transaction_manager = MockTransactionManager::new();
        transaction_manager
            .expect_begin()
            .returning(|| Ok(Transaction::new(None)));
        transaction_manager
    }

    fn listener_expecting(
        entity_type: EntityType,
        operation: OperationType,
        entity_name: &'static str,
    ) -> MockOperationEventListener {
        let mut listener = MockOperationEventListener::new();
        listener
            .expect_on_operation_event()
            .withf(move |event| {
                event.entity_type == entity_type
                    && event.operation == operation
                    && event.entity_name.as_deref() == Some(entity_name)
                    && event.initiated_by.as_deref() == Some("alice")
            })
            .times(1)
            .returning(|_| Ok(()));
        listener
    }

    fn listener_never_called() -> MockOperationEventListener {
        let mut listener = MockOperationEventListener::new();
        listener.expect_on_operation_event().never();
        listener
    }

    fn service(
        courses_repository: MockCoursesRepository,
        authors_repository: MockAuthorsRepository,
        listener: impl OperationEventListener + 'static,
    ) -> CoursesServiceImpl {
        CoursesServiceImpl::new(
            Arc::new(transaction_manager()),
            Arc::new(courses_repository),
            Arc::new(authors_repository),
            Arc::new(DomainEventPublisher::new(vec![Arc::new(listener)])),
        )
    }

    #[tokio::test]
    async fn create_course_announced_once() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository
            .expect_insert()
            .times(1)
            .returning(|_, course| Ok(Course::new(ObjectId::new(), course)));
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_expecting(EntityType::Course, OperationType::Created, "Intro"),
        );

        let result = service.create_course(&user(), input_course(vec![])).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_course_event_id_matches_persisted_id() {
        let id = ObjectId::new();

        let mut courses_repository = MockCoursesRepository::new();
        courses_repository
            .expect_insert()
            .returning(move |_, course| Ok(Course::new(id, course)));
        let mut listener = MockOperationEventListener::new();
        listener
            .expect_on_operation_event()
            .withf(move |event| event.entity_id == Some(id.to_hex()))
            .times(1)
            .returning(|_| Ok(()));
        let service = service(courses_repository, MockAuthorsRepository::new(), listener);

        let course = service
            .create_course(&user(), input_course(vec![]))
            .await
            .unwrap();

        assert_eq!(course.id, id.to_hex());
    }

    #[tokio::test]
    async fn create_course_blank_title() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository.expect_insert().never();
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_never_called(),
        );

        let mut course = input_course(vec![]);
        course.title = "  ".to_string();
        let result = service.create_course(&user(), course).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_course_author_not_exist() {
        let mut authors_repository = MockAuthorsRepository::new();
        authors_repository
            .expect_count_existing()
            .returning(|_| Ok(1));
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository.expect_insert().never();
        let service = service(
            courses_repository,
            authors_repository,
            listener_never_called(),
        );

        let author_ids = vec![ObjectId::new().to_hex(), ObjectId::new().to_hex()];
        let result = service
            .create_course(&user(), input_course(author_ids))
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_course_duplicated_author_ids_collapsed() {
        let author_id = ObjectId::new();

        let mut authors_repository = MockAuthorsRepository::new();
        authors_repository
            .expect_count_existing()
            .withf(move |ids| ids.to_vec() == vec![author_id])
            .returning(|_| Ok(1));
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository
            .expect_insert()
            .withf(move |_, course| course.author_ids == vec![author_id])
            .returning(|_, course| Ok(Course::new(ObjectId::new(), course)));
        let service = service(
            courses_repository,
            authors_repository,
            listener_expecting(EntityType::Course, OperationType::Created, "Intro"),
        );

        let author_ids = vec![author_id.to_hex(), author_id.to_hex()];
        let result = service
            .create_course(&user(), input_course(author_ids))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_course_database_error_not_announced() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository.expect_insert().returning(|_, _| {
            Err(repository::Error::Mongo(
                ErrorKind::Custom(Arc::new("write failed")).into(),
            ))
        });
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_never_called(),
        );

        let result = service.create_course(&user(), input_course(vec![])).await;

        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[tokio::test]
    async fn create_course_publish_failure_not_propagated() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository
            .expect_insert()
            .returning(|_, course| Ok(Course::new(ObjectId::new(), course)));
        let mut publisher = MockNotificationPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .returning(|_| Err(PublishError::Closed));
        let relay = Arc::new(NotificationRelay::new(Arc::new(publisher)));
        let service = CoursesServiceImpl::new(
            Arc::new(transaction_manager()),
            Arc::new(courses_repository),
            Arc::new(MockAuthorsRepository::new()),
            Arc::new(DomainEventPublisher::new(vec![relay.clone()])),
        );

        let result = service.create_course(&user(), input_course(vec![])).await;

        assert!(result.is_ok());
        assert_eq!(relay.dropped_notifications(), 1);
    }

    #[tokio::test]
    async fn update_course_announced_once() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository
            .expect_update()
            .times(1)
            .returning(|_, id, course| Ok(Some(Course::new(id, course))));
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_expecting(EntityType::Course, OperationType::Updated, "Intro"),
        );

        let id = ObjectId::new().to_hex();
        let course = service
            .update_course(&user(), &id, input_course(vec![]))
            .await
            .unwrap();

        assert_eq!(course.id, id);
    }

    #[tokio::test]
    async fn update_course_not_exist() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository
            .expect_update()
            .returning(|_, _, _| Ok(None));
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_never_called(),
        );

        let result = service
            .update_course(&user(), &ObjectId::new().to_hex(), input_course(vec![]))
            .await;

        assert!(matches!(result, Err(Error::CourseNotExist)));
    }

    #[tokio::test]
    async fn update_course_invalid_id() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository.expect_update().never();
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_never_called(),
        );

        let result = service
            .update_course(&user(), "not an id", input_course(vec![]))
            .await;

        assert!(matches!(result, Err(Error::CourseNotExist)));
    }

    #[tokio::test]
    async fn delete_course_announced_with_deleted_title() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository.expect_delete().times(1).returning(|_, id| {
            Ok(Some(Course {
                id,
                title: "Deleted title".to_string(),
                description: String::new(),
                creation_date: "2024-03-01".to_string(),
                duration: 10,
                author_ids: vec![],
            }))
        });
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_expecting(EntityType::Course, OperationType::Deleted, "Deleted title"),
        );

        let result = service
            .delete_course(&user(), &ObjectId::new().to_hex())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_course_not_exist() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository
            .expect_delete()
            .returning(|_, _| Ok(None));
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_never_called(),
        );

        let result = service
            .delete_course(&user(), &ObjectId::new().to_hex())
            .await;

        assert!(matches!(result, Err(Error::CourseNotExist)));
    }

    #[tokio::test]
    async fn find_course_not_exist() {
        let mut courses_repository = MockCoursesRepository::new();
        courses_repository.expect_find().returning(|_| Ok(None));
        let service = service(
            courses_repository,
            MockAuthorsRepository::new(),
            listener_never_called(),
        );

        let result = service.find_course(&ObjectId::new().to_hex()).await;

        assert!(matches!(result, Err(Error::CourseNotExist)));
    }
}
