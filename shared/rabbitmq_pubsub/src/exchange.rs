use amqprs::channel::{ExchangeDeclareArguments, ExchangeType};

///
/// Arguments shared by publishers and subscribers.
/// Both sides must declare the exchange identically.
///
pub fn fanout_exchange_args(exchange: &str) -> ExchangeDeclareArguments {
    let mut args = ExchangeDeclareArguments::of_type(exchange, ExchangeType::Fanout)
        .durable(true)
        .finish();
    args.no_wait = false;

    args
}
