use super::*;

/// Tests the root/reply split for a course's threads.
///
/// Roots come back newest first with authors; replies attach to their root
/// ids oldest first.
///
/// Expected: Ok with one root carrying one reply
#[tokio::test]
async fn splits_roots_and_replies() -> Result<(), DbErr> {
    let test = comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let author = create_student(db).await?;
    let replier = create_student(db).await?;

    let root = create_comment(db, course.id, author.id, "Great course!").await?;
    create_reply(db, &root, replier.id, "Agreed.").await?;

    let repo = CommentRepository::new(db);

    let roots = repo.get_roots_for_course(course.id).await?;
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].1.as_ref().unwrap().name, author.name);

    let replies = repo.get_replies_for_roots(&[root.id]).await?;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].0.parent_id, Some(root.id));

    Ok(())
}

/// Tests deleting a root comment.
///
/// Deleting a root removes its replies in the same call.
///
/// Expected: Ok with no roots and no replies left
#[tokio::test]
async fn deleting_root_removes_replies() -> Result<(), DbErr> {
    let test = comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let author = create_student(db).await?;

    let root = create_comment(db, course.id, author.id, "Great course!").await?;
    create_reply(db, &root, author.id, "Replying to myself.").await?;

    let repo = CommentRepository::new(db);
    repo.delete(root.id).await?;

    assert!(repo.get_roots_for_course(course.id).await?.is_empty());
    assert!(repo.get_replies_for_roots(&[root.id]).await?.is_empty());

    Ok(())
}
