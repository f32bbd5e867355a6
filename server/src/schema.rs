//! GraphQL binding of the core resolver.
//!
//! The schema holds an `Arc<dyn TodoResolver>` as context data; every root
//! field and the `Todo.user` field fetch it and delegate.

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, InputObject, Object, Result, Schema, ID,
};
use todo_core::{NewTodo, Todo, TodoResolver, User};

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(resolver: Arc<dyn TodoResolver>) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(resolver)
        .finish()
}

fn resolver<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn TodoResolver>> {
    ctx.data::<Arc<dyn TodoResolver>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<TodoObject>> {
        let todos = resolver(ctx)?.todos().await;
        Ok(todos.into_iter().map(TodoObject).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_todo(&self, ctx: &Context<'_>, input: NewTodoInput) -> Result<TodoObject> {
        let todo = resolver(ctx)?
            .create_todo(input.into())
            .await
            .map_err(|err| {
                let code = err.code();
                err.extend_with(|_, ext| ext.set("code", code))
            })?;
        Ok(TodoObject(todo))
    }
}

#[derive(InputObject)]
#[graphql(name = "NewTodo")]
pub struct NewTodoInput {
    pub text: String,
    pub user_id: String,
}

impl From<NewTodoInput> for NewTodo {
    fn from(input: NewTodoInput) -> Self {
        NewTodo::new(input.text, input.user_id)
    }
}

pub struct TodoObject(pub Todo);

#[Object(name = "Todo")]
impl TodoObject {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn text(&self) -> &str {
        &self.0.text
    }

    async fn done(&self) -> bool {
        self.0.done
    }

    /// Null when the todo references a user that does not exist.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let user = resolver(ctx)?.todo_user(&self.0).await;
        Ok(user.map(UserObject))
    }
}

pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }
}
