use super::*;
use entity::comment_reaction::Kind;

/// Tests reacting to a comment for the first time.
///
/// Expected: Ok(Some(Like)) with exactly one reaction row
#[tokio::test]
async fn first_toggle_inserts_reaction() -> Result<(), DbErr> {
    let test = comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let author = create_student(db).await?;
    let reader = create_student(db).await?;
    let comment = create_comment(db, course.id, author.id, "Great course!").await?;

    let repo = CommentRepository::new(db);
    let result = repo.toggle_reaction(comment.id, reader.id, Kind::Like).await?;

    assert_eq!(result, Some(Kind::Like));
    assert_eq!(repo.get_reactions_for_comments(&[comment.id]).await?.len(), 1);

    Ok(())
}

/// Tests toggling the same reaction twice.
///
/// The second like removes the first; membership flips off.
///
/// Expected: Ok(None) with no reaction rows left
#[tokio::test]
async fn same_reaction_toggles_off() -> Result<(), DbErr> {
    let test = comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let author = create_student(db).await?;
    let comment = create_comment(db, course.id, author.id, "Great course!").await?;

    let repo = CommentRepository::new(db);
    repo.toggle_reaction(comment.id, author.id, Kind::Like).await?;
    let result = repo.toggle_reaction(comment.id, author.id, Kind::Like).await?;

    assert_eq!(result, None);
    assert!(repo.get_reactions_for_comments(&[comment.id]).await?.is_empty());

    Ok(())
}

/// Tests switching between like and dislike.
///
/// The opposite reaction replaces the stored one; a user never holds two
/// reactions on the same comment.
///
/// Expected: Ok(Some(Dislike)) with a single row of the new kind
#[tokio::test]
async fn opposite_reaction_switches() -> Result<(), DbErr> {
    let test = comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let author = create_student(db).await?;
    let comment = create_comment(db, course.id, author.id, "Great course!").await?;

    let repo = CommentRepository::new(db);
    repo.toggle_reaction(comment.id, author.id, Kind::Like).await?;
    let result = repo
        .toggle_reaction(comment.id, author.id, Kind::Dislike)
        .await?;

    assert_eq!(result, Some(Kind::Dislike));

    let reactions = repo.get_reactions_for_comments(&[comment.id]).await?;
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].kind, Kind::Dislike);

    Ok(())
}

/// Tests that reactions from different users accumulate.
///
/// Expected: Ok with one row per reacting user
#[tokio::test]
async fn reactions_accumulate_per_user() -> Result<(), DbErr> {
    let test = comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let author = create_student(db).await?;
    let other = create_student(db).await?;
    let comment = create_comment(db, course.id, author.id, "Great course!").await?;

    let repo = CommentRepository::new(db);
    repo.toggle_reaction(comment.id, author.id, Kind::Like).await?;
    repo.toggle_reaction(comment.id, other.id, Kind::Dislike).await?;

    assert_eq!(repo.get_reactions_for_comments(&[comment.id]).await?.len(), 2);

    Ok(())
}
