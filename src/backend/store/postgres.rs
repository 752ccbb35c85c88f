/**
 * PostgreSQL Store
 *
 * sqlx implementation of the store traits. Listing and single-record views
 * join the `users` table so posts carry their author and projects their
 * owner; a deleted user simply yields a `NULL` join and `None` summary.
 *
 * # Schema
 *
 * The schema lives in `migrations/` and is applied by `PgStore::migrate`.
 * Usernames and emails carry unique constraints, which is what turns a
 * concurrent duplicate registration into `StoreError::Duplicate`.
 *
 * Comments reference posts without a foreign key, so removing a post's
 * comments is a separate statement issued by the blog service.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::store::{
    BlogStore, ContactStore, ProjectStore, StoreError, StoreResult, UserStore,
};
use crate::shared::models::{
    AuthorSummary, BlogPost, BlogPostPatch, BlogPostView, Comment, CommentAuthor, CommentView,
    ContactMessage, NewBlogPost, NewComment, NewContactMessage, NewProject, NewUser, Project,
    ProjectPatch, ProjectView, User,
};

/// Map a driver error, singling out unique-constraint violations
fn map_db_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::Duplicate {
                constraint: db.constraint().unwrap_or("unique").to_string(),
            };
        }
    }
    StoreError::Database(err)
}

/// Post row with the author's columns from a `LEFT JOIN users`
#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    excerpt: String,
    author_id: Uuid,
    tags: Vec<String>,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: Option<String>,
    author_email: Option<String>,
}

impl From<PostRow> for BlogPostView {
    fn from(row: PostRow) -> Self {
        let author = match (row.author_username, row.author_email) {
            (Some(username), Some(email)) => Some(AuthorSummary {
                id: row.author_id,
                username,
                email,
            }),
            _ => None,
        };
        BlogPostView {
            post: BlogPost {
                id: row.id,
                title: row.title,
                content: row.content,
                excerpt: row.excerpt,
                author_id: row.author_id,
                tags: row.tags,
                published: row.published,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            author,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    body: String,
    author_id: Uuid,
    post_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: Option<String>,
}

impl From<CommentRow> for CommentView {
    fn from(row: CommentRow) -> Self {
        CommentView {
            author: row.author_username.map(|username| CommentAuthor {
                id: row.author_id,
                username,
            }),
            comment: Comment {
                id: row.id,
                body: row.body,
                author_id: row.author_id,
                post_id: row.post_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    title: String,
    description: String,
    image_url: String,
    repo_url: String,
    live_url: String,
    technologies: Vec<String>,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_username: Option<String>,
    owner_email: Option<String>,
}

impl From<ProjectRow> for ProjectView {
    fn from(row: ProjectRow) -> Self {
        let owner = match (row.owner_username, row.owner_email) {
            (Some(username), Some(email)) => Some(AuthorSummary {
                id: row.owner_id,
                username,
                email,
            }),
            _ => None,
        };
        ProjectView {
            project: Project {
                id: row.id,
                title: row.title,
                description: row.description,
                image_url: row.image_url,
                repo_url: row.repo_url,
                live_url: row.live_url,
                technologies: row.technologies,
                owner_id: row.owner_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            owner,
        }
    }
}

const POST_VIEW_SELECT: &str = r#"
    SELECT p.id, p.title, p.content, p.excerpt, p.author_id, p.tags, p.published,
           p.created_at, p.updated_at,
           u.username AS author_username, u.email AS author_email
    FROM blog_posts p
    LEFT JOIN users u ON u.id = p.author_id
"#;

const COMMENT_VIEW_SELECT: &str = r#"
    SELECT c.id, c.body, c.author_id, c.post_id, c.created_at, c.updated_at,
           u.username AS author_username
    FROM comments c
    LEFT JOIN users u ON u.id = c.author_id
"#;

const PROJECT_VIEW_SELECT: &str = r#"
    SELECT p.id, p.title, p.description, p.image_url, p.repo_url, p.live_url,
           p.technologies, p.owner_id, p.created_at, p.updated_at,
           u.username AS owner_username, u.email AS owner_email
    FROM projects p
    LEFT JOIN users u ON u.id = p.owner_id
"#;

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE email = $1 OR username = $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn list_posts(&self) -> StoreResult<Vec<BlogPostView>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{POST_VIEW_SELECT} ORDER BY p.created_at DESC, p.seq DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(BlogPostView::from).collect())
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, title, content, excerpt, author_id, tags, published, created_at, updated_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn find_post_view(&self, id: Uuid) -> StoreResult<Option<BlogPostView>> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{POST_VIEW_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BlogPostView::from))
    }

    async fn insert_post(&self, post: NewBlogPost) -> StoreResult<BlogPost> {
        let now = Utc::now();
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts
                (id, title, content, excerpt, author_id, tags, published, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING id, title, content, excerpt, author_id, tags, published, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(post.author_id)
        .bind(&post.tags)
        .bind(post.published)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn update_post(&self, id: Uuid, patch: BlogPostPatch) -> StoreResult<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                excerpt = COALESCE($4, excerpt),
                tags = COALESCE($5, tags),
                published = COALESCE($6, published),
                updated_at = $7
            WHERE id = $1
            RETURNING id, title, content, excerpt, author_id, tags, published, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.excerpt)
        .bind(patch.tags)
        .bind(patch.published)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_comments(&self, post_id: Uuid) -> StoreResult<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "{COMMENT_VIEW_SELECT} WHERE c.post_id = $1 ORDER BY c.created_at DESC, c.seq DESC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(CommentView::from).collect())
    }

    async fn find_comment_view(&self, id: Uuid) -> StoreResult<Option<CommentView>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!("{COMMENT_VIEW_SELECT} WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(CommentView::from))
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, body, author_id, post_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, body, author_id, post_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&comment.body)
        .bind(comment.author_id)
        .bind(comment.post_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(comment)
    }

    async fn delete_comments_for_post(&self, post_id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn list_projects(&self) -> StoreResult<Vec<ProjectView>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "{PROJECT_VIEW_SELECT} ORDER BY p.created_at DESC, p.seq DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(ProjectView::from).collect())
    }

    async fn find_project(&self, id: Uuid) -> StoreResult<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, image_url, repo_url, live_url, technologies,
                   owner_id, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(project)
    }

    async fn find_project_view(&self, id: Uuid) -> StoreResult<Option<ProjectView>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!("{PROJECT_VIEW_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(ProjectView::from))
    }

    async fn insert_project(&self, project: NewProject) -> StoreResult<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (id, title, description, image_url, repo_url, live_url, technologies,
                 owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING id, title, description, image_url, repo_url, live_url, technologies,
                      owner_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.repo_url)
        .bind(&project.live_url)
        .bind(&project.technologies)
        .bind(project.owner_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(project)
    }

    async fn update_project(
        &self,
        id: Uuid,
        patch: ProjectPatch,
    ) -> StoreResult<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                repo_url = COALESCE($5, repo_url),
                live_url = COALESCE($6, live_url),
                technologies = COALESCE($7, technologies),
                updated_at = $8
            WHERE id = $1
            RETURNING id, title, description, image_url, repo_url, live_url, technologies,
                      owner_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.image_url)
        .bind(patch.repo_url)
        .bind(patch.live_url)
        .bind(patch.technologies)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(project)
    }

    async fn delete_project(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ContactStore for PgStore {
    async fn insert_message(&self, message: NewContactMessage) -> StoreResult<ContactMessage> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (id, name, email, message, read, created_at, updated_at)
            VALUES ($1, $2, $3, $4, FALSE, $5, $5)
            RETURNING id, name, email, message, read, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(message)
    }

    async fn list_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, message, read, created_at, updated_at
            FROM contact_messages
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }
}
