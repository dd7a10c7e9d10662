use lapin::options::{
    BasicAckOptions, BasicConsumeOptions, BasicPublishOptions, QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use once_cell::sync::Lazy;
use rocket::futures::StreamExt;
use std::future::Future;

use crate::config::RESOURCE_SERVER_CONFIG;

/// the queue folder writes drop the uploader's id onto so contribution
/// counters get recalculated off the request path
pub static CONTRIBUTION_RECALC_QUEUE: &str = "contribution_recalc";

struct RabbitProvider {
    /// the connection to the rabbit mq
    connection: Connection,
    /// the channel that we will be consuming messages from / publishing messages to
    channel: Channel,
}

/// sets up a long-running consumer job that invokes the passed [function](Fn)
/// whenever there are items in the rabbit queue
/// * `function` - the async function to be called on the value consumed from the queue. It must take the data
///   as a [String] and output `true` if the operation was a success, and `false` if the operation was a failure
///
/// messages are acked either way: recalculation is idempotent and the next
/// folder write re-queues the same user, so a failed message is not worth
/// redelivering
#[cfg(any(not(test), rust_analyzer))]
pub fn contribution_recalc_consumer<F, Fut>(function: F)
where
    F: Fn(String) -> Fut + Send + 'static,
    Fut: Future<Output = bool> + Send,
{
    let config = RESOURCE_SERVER_CONFIG.clone();
    if config.rabbit_mq.enabled {
        // using as_ref here because I definitely do _not_ want to clone the rabbit connection
        let provider = RABBIT_PROVIDER.as_ref().unwrap();

        async_global_executor::spawn(async move {
            let mut consumer = provider
                .channel
                .basic_consume(
                    CONTRIBUTION_RECALC_QUEUE,
                    "contribution_recalc_consumer",
                    BasicConsumeOptions::default(),
                    FieldTable::default(),
                )
                .await
                .unwrap();
            while let Some(delivery) = consumer.next().await {
                let delivery = delivery.expect("error in consumer");
                let msg = String::from_utf8(delivery.data.clone()).unwrap();
                if !function(msg).await {
                    log::warn!(
                        "contribution recalculation failed; dropping the message since the next folder write will queue a fresh one"
                    );
                }
                delivery
                    .ack(BasicAckOptions::default())
                    .await
                    .expect("ack failed");
            }
        })
        .detach();
    }
}

/// publishes a message to the queue with the passed `queue_name`.
/// failing to publish a message will not return an error, but will log the
/// reason for failure. This is because rabbit is used to offload smaller tasks
/// that aren't strictly necessary for serving the request
#[cfg(any(not(test), rust_analyzer))]
pub fn publish_message(queue_name: &str, message: &String) {
    let config = RESOURCE_SERVER_CONFIG.clone();
    if !config.rabbit_mq.enabled {
        return;
    }
    let provider = RABBIT_PROVIDER.as_ref().unwrap();
    let channel = &provider.channel;
    let payload: &[u8] = message.as_bytes();
    let res = async_global_executor::block_on(channel.basic_publish(
        "",
        queue_name,
        BasicPublishOptions::default(),
        payload,
        BasicProperties::default(),
    ));
    if let Err(e) = res {
        log::error!(
            "Failed to publish message {message} to queue {queue_name}. Exception is {:?}",
            e
        );
    }
}

/// should only be called if RabbitConfig.enabled = true
#[cfg(any(not(test), rust_analyzer))]
impl RabbitProvider {
    fn init() -> Self {
        let config = RESOURCE_SERVER_CONFIG.clone();
        let (connection, channel) = async_global_executor::block_on(async {
            let rabbit_connection = Connection::connect(
                &config.rabbit_mq.address.unwrap(),
                ConnectionProperties::default(),
            )
            .await
            .unwrap();
            let channel = rabbit_connection.create_channel().await.unwrap();
            // even though this isn't used anywhere, we need to declare the queue or else it won't exist when we go to consume it
            channel
                .queue_declare(
                    CONTRIBUTION_RECALC_QUEUE,
                    QueueDeclareOptions::default(),
                    FieldTable::default(),
                )
                .await
                .unwrap();
            (rabbit_connection, channel)
        });
        RabbitProvider {
            connection,
            channel,
        }
    }
}

#[cfg(any(not(test), rust_analyzer))]
static RABBIT_PROVIDER: Lazy<Option<RabbitProvider>> = Lazy::new(|| {
    let config = RESOURCE_SERVER_CONFIG.clone();
    return if config.rabbit_mq.enabled {
        Some(RabbitProvider::init())
    } else {
        None
    };
});

// ---------------------------- test implementations that don't start up rabbit

#[cfg(all(test, not(rust_analyzer)))]
pub fn contribution_recalc_consumer<F, Fut>(_: F)
where
    F: Fn(String) -> Fut + Send + 'static,
    Fut: Future<Output = bool> + Send,
{
}

#[cfg(all(test, not(rust_analyzer)))]
pub fn publish_message(_: &str, _: &String) {}
