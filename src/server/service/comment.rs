use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use entity::comment_reaction::Kind;

use crate::server::{
    data::{comment::CommentRepository, course::CourseRepository},
    error::AppError,
    model::comment::{CommentNode, CreateCommentParam, ReactionSummary},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a comment or a reply on a course.
    ///
    /// Replies attach to root comments only and must stay on the same course;
    /// one level of nesting, no deeper.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created comment
    /// - `Err(AppError::NotFound)` - Unknown course or parent comment
    /// - `Err(AppError::BadRequest)` - Nested reply, cross-course reply, or empty content
    pub async fn create(
        &self,
        param: CreateCommentParam,
    ) -> Result<entity::comment::Model, AppError> {
        if param.content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Comment content cannot be empty".to_string(),
            ));
        }

        let course = CourseRepository::new(self.db)
            .get_by_id(param.course_id)
            .await?;
        if course.is_none() {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        let repo = CommentRepository::new(self.db);

        if let Some(parent_id) = param.parent_id {
            let Some(parent) = repo.get_by_id(parent_id).await? else {
                return Err(AppError::NotFound("Parent comment not found".to_string()));
            };
            if parent.parent_id.is_some() {
                return Err(AppError::BadRequest(
                    "Replies to replies are not supported".to_string(),
                ));
            }
            if parent.course_id != param.course_id {
                return Err(AppError::BadRequest(
                    "Reply must be on the same course as its parent".to_string(),
                ));
            }
        }

        Ok(repo.create(param).await?)
    }

    /// Gets a course's comment threads.
    ///
    /// Roots are newest first, replies oldest first, each carrying author
    /// names and reaction counts.
    pub async fn list(&self, course_id: i32) -> Result<Vec<CommentNode>, AppError> {
        let repo = CommentRepository::new(self.db);

        let roots = repo.get_roots_for_course(course_id).await?;
        let root_ids: Vec<i32> = roots.iter().map(|(c, _)| c.id).collect();
        let replies = repo.get_replies_for_roots(&root_ids).await?;

        let mut all_ids = root_ids.clone();
        all_ids.extend(replies.iter().map(|(c, _)| c.id));
        let reactions = repo.get_reactions_for_comments(&all_ids).await?;

        let mut likes: HashMap<i32, u64> = HashMap::new();
        let mut dislikes: HashMap<i32, u64> = HashMap::new();
        for reaction in reactions {
            let target = match reaction.kind {
                Kind::Like => &mut likes,
                Kind::Dislike => &mut dislikes,
            };
            *target.entry(reaction.comment_id).or_default() += 1;
        }

        let mut replies_by_root: HashMap<i32, Vec<CommentNode>> = HashMap::new();
        for (comment, author) in replies {
            let parent_id = comment.parent_id.unwrap_or_default();
            let node = CommentNode {
                likes: likes.get(&comment.id).copied().unwrap_or(0),
                dislikes: dislikes.get(&comment.id).copied().unwrap_or(0),
                author_name: author.map(|a| a.name).unwrap_or_default(),
                comment,
                replies: Vec::new(),
            };
            replies_by_root.entry(parent_id).or_default().push(node);
        }

        Ok(roots
            .into_iter()
            .map(|(comment, author)| CommentNode {
                likes: likes.get(&comment.id).copied().unwrap_or(0),
                dislikes: dislikes.get(&comment.id).copied().unwrap_or(0),
                author_name: author.map(|a| a.name).unwrap_or_default(),
                replies: replies_by_root.remove(&comment.id).unwrap_or_default(),
                comment,
            })
            .collect())
    }

    /// Toggles a like on a comment
    pub async fn toggle_like(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<ReactionSummary, AppError> {
        self.toggle(comment_id, user_id, Kind::Like).await
    }

    /// Toggles a dislike on a comment
    pub async fn toggle_dislike(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<ReactionSummary, AppError> {
        self.toggle(comment_id, user_id, Kind::Dislike).await
    }

    /// Deletes the author's own comment, replies included.
    /// Returns false if the comment doesn't exist or belongs to someone else
    pub async fn delete(&self, comment_id: i32, author_id: i32) -> Result<bool, AppError> {
        let repo = CommentRepository::new(self.db);

        let Some(comment) = repo.get_by_id(comment_id).await? else {
            return Ok(false);
        };
        if comment.author_id != author_id {
            return Ok(false);
        }

        repo.delete(comment_id).await?;
        Ok(true)
    }

    async fn toggle(
        &self,
        comment_id: i32,
        user_id: i32,
        kind: Kind,
    ) -> Result<ReactionSummary, AppError> {
        let repo = CommentRepository::new(self.db);

        if repo.get_by_id(comment_id).await?.is_none() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        let user_reaction = repo.toggle_reaction(comment_id, user_id, kind).await?;

        let reactions = repo.get_reactions_for_comments(&[comment_id]).await?;
        let likes = reactions
            .iter()
            .filter(|r| r.kind == Kind::Like)
            .count() as u64;
        let dislikes = reactions
            .iter()
            .filter(|r| r.kind == Kind::Dislike)
            .count() as u64;

        Ok(ReactionSummary {
            comment_id,
            likes,
            dislikes,
            user_reaction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;
    use test_utils::factory::comment::{create_comment, create_reply};
    use test_utils::factory::course::create_course;
    use test_utils::factory::user::{create_student, create_teacher};

    async fn thread_tables() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Course)
            .with_table(entity::prelude::Comment)
            .with_table(entity::prelude::CommentReaction)
            .build()
            .await
            .unwrap()
    }

    /// Tests that a reply to a reply is rejected.
    ///
    /// Threads nest one level only.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_nested_replies() {
        let test = thread_tables().await;
        let db = test.db.as_ref().unwrap();

        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let author = create_student(db).await.unwrap();

        let root = create_comment(db, course.id, author.id, "Root").await.unwrap();
        let reply = create_reply(db, &root, author.id, "Reply").await.unwrap();

        let result = CommentService::new(db)
            .create(CreateCommentParam {
                course_id: course.id,
                author_id: author.id,
                content: "Nested".to_string(),
                parent_id: Some(reply.id),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that a reply cannot cross courses.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_cross_course_replies() {
        let test = thread_tables().await;
        let db = test.db.as_ref().unwrap();

        let teacher = create_teacher(db).await.unwrap();
        let course_a = create_course(db, teacher.id).await.unwrap();
        let course_b = create_course(db, teacher.id).await.unwrap();
        let author = create_student(db).await.unwrap();

        let root = create_comment(db, course_a.id, author.id, "Root").await.unwrap();

        let result = CommentService::new(db)
            .create(CreateCommentParam {
                course_id: course_b.id,
                author_id: author.id,
                content: "Wrong course".to_string(),
                parent_id: Some(root.id),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests the assembled thread view.
    ///
    /// Roots come newest first with reply lists and reaction counts attached.
    ///
    /// Expected: Ok with counts matching the toggled reactions
    #[tokio::test]
    async fn assembles_threads_with_counts() {
        let test = thread_tables().await;
        let db = test.db.as_ref().unwrap();

        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let author = create_student(db).await.unwrap();
        let reader = create_student(db).await.unwrap();

        let root = create_comment(db, course.id, author.id, "Root").await.unwrap();
        create_reply(db, &root, reader.id, "Reply").await.unwrap();

        let service = CommentService::new(db);
        service.toggle_like(root.id, author.id).await.unwrap();
        service.toggle_like(root.id, reader.id).await.unwrap();

        let threads = service.list(course.id).await.unwrap();

        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].likes, 2);
        assert_eq!(threads[0].dislikes, 0);
        assert_eq!(threads[0].replies.len(), 1);
        assert_eq!(threads[0].replies[0].author_name, reader.name);
    }

    /// Tests that only the author can delete a comment.
    ///
    /// Expected: Ok(false) for a stranger, Ok(true) for the author
    #[tokio::test]
    async fn delete_is_author_only() {
        let test = thread_tables().await;
        let db = test.db.as_ref().unwrap();

        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let author = create_student(db).await.unwrap();
        let stranger = create_student(db).await.unwrap();

        let root = create_comment(db, course.id, author.id, "Root").await.unwrap();

        let service = CommentService::new(db);

        assert!(!service.delete(root.id, stranger.id).await.unwrap());
        assert!(service.delete(root.id, author.id).await.unwrap());
    }
}
